// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between front ends (the CLI) and the services
// - Translates between DTOs and domain entities
// - Never contains business logic

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{CommandResult, ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
