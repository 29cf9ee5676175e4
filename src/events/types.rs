// events/types.rs
//
// Curator events.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::SourceKind;

/// Trait that all curator events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// SEARCH EVENTS
// ============================================================================

/// Emitted when a new search term replaces the result list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term: String,
    pub generation: u64,
}

impl SearchStarted {
    pub fn new(term: String, generation: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term,
            generation,
        }
    }
}

impl DomainEvent for SearchStarted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SearchStarted" }
}

/// Emitted when a page of merged results is committed to the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPageLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term: String,
    pub page: u32,
    pub added: usize,
    pub exhausted: bool,
    /// Museums that failed while this page was fetched
    pub unavailable: Vec<SourceKind>,
}

impl SearchPageLoaded {
    pub fn new(
        term: String,
        page: u32,
        added: usize,
        exhausted: bool,
        unavailable: Vec<SourceKind>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term,
            page,
            added,
            exhausted,
            unavailable,
        }
    }
}

impl DomainEvent for SearchPageLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SearchPageLoaded" }
}

/// Emitted when one museum fails while the search carries on without it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFetchFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub museum: SourceKind,
    pub term: String,
    pub page: u32,
    pub message: String,
}

impl SourceFetchFailed {
    pub fn new(museum: SourceKind, term: String, page: u32, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            museum,
            term,
            page,
            message,
        }
    }
}

impl DomainEvent for SourceFetchFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SourceFetchFailed" }
}

/// Emitted when a response arrives for a term that is no longer current
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDiscarded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub term: String,
    pub page: u32,
}

impl SearchDiscarded {
    pub fn new(term: String, page: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            term,
            page,
        }
    }
}

impl DomainEvent for SearchDiscarded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SearchDiscarded" }
}

// ============================================================================
// COLLECTION EVENTS
// ============================================================================

/// Emitted when the pending selection is saved into the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionCommitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub added_ids: Vec<String>,
    /// Selected artworks that were already collected
    pub skipped: usize,
}

impl SelectionCommitted {
    pub fn new(added_ids: Vec<String>, skipped: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            added_ids,
            skipped,
        }
    }
}

impl DomainEvent for SelectionCommitted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SelectionCommitted" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub artwork_id: String,
}

impl ArtworkRemoved {
    pub fn new(artwork_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            artwork_id,
        }
    }
}

impl DomainEvent for ArtworkRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ArtworkRemoved" }
}

// ============================================================================
// ENRICHMENT EVENTS
// ============================================================================

/// Emitted after a detail fetch has been propagated to every store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkEnriched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub artwork_id: String,
    pub in_results: bool,
    pub in_collection: bool,
}

impl ArtworkEnriched {
    pub fn new(artwork_id: String, in_results: bool, in_collection: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            artwork_id,
            in_results,
            in_collection,
        }
    }
}

impl DomainEvent for ArtworkEnriched {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ArtworkEnriched" }
}

/// Emitted when a detail fetch fails; the artwork is left as it was
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub artwork_id: String,
    pub message: String,
}

impl EnrichmentFailed {
    pub fn new(artwork_id: String, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            artwork_id,
            message,
        }
    }
}

impl DomainEvent for EnrichmentFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "EnrichmentFailed" }
}
