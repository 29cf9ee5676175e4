// events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Enrichment
    ArtworkEnriched,
    // Collection
    ArtworkRemoved,
    EnrichmentFailed,
    SearchDiscarded,
    SearchPageLoaded,
    // Search
    SearchStarted,
    SelectionCommitted,
    SourceFetchFailed,
};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::{register_activity_handlers, ActivityLog};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
