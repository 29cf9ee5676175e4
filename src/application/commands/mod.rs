// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between front ends and services
// - Commands accept plain values, return DTOs
// - Commands convert errors into ErrorResponse
// - Commands NEVER contain business logic

pub mod collection_commands;
pub mod search_commands;

pub use collection_commands::*;
pub use search_commands::*;

use crate::application::error_handling::{CommandResult, ErrorResponse};
use crate::domain::SortOption;

/// Parse an optional sort token. Missing or empty means unsorted.
pub fn parse_sort(token: Option<&str>) -> CommandResult<Option<SortOption>> {
    match token.map(str::trim) {
        None | Some("") => Ok(None),
        Some(token) => SortOption::from_token(token)
            .map(Some)
            .ok_or_else(|| ErrorResponse::validation(format!("Unknown sort option '{}'", token))),
    }
}
