// events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe.

pub mod activity_handler;

pub use activity_handler::{register_activity_handlers, ActivityLog};
