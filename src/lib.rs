// src/lib.rs
// Museum Curator - search two museum open-access APIs and curate a collection
//
// Architecture:
// - Domain-centric: dates, sorting, results and collections are pure rules
// - Event-driven: services report what happened through the event bus
// - Explicit: every cross-store update is by id, nothing is positional
// - Session-scoped: collections live for the session only
// - Application Layer: boundary for front ends (the CLI)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    parse_historical_date,
    sort_artworks,
    validate_artwork,
    validate_collection,
    // Artwork
    Artwork,
    ArtworkDetail,
    // Collection
    Collection,
    // Dates
    DateEstimate,
    DateForm,
    HistoricalDateRules,
    // Results
    PageCommit,
    PageRequest,
    PaginationState,
    ResultStore,
    SelectionSet,
    // Sorting
    SortOption,
    SourceKind,
};

// ============================================================================
// PUBLIC API - Errors and Configuration
// ============================================================================

pub use config::{CuratorConfig, SourceConfig};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_activity_handlers,
    ActivityLog,
    ArtworkEnriched,
    ArtworkRemoved,
    DomainEvent,
    EnrichmentFailed,
    EventBus,
    EventLogEntry,
    SearchDiscarded,
    SearchPageLoaded,
    SearchStarted,
    SelectionCommitted,
    SourceFetchFailed,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    ArtworkDetailFetcher, ClevelandClient, MuseumSource, SourcePage, VamClient,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AggregatedPage,
    CollectionService,
    CommitSummary,
    EnrichOutcome,
    LoadOutcome,
    SearchAggregator,
    SearchService,
    SearchViewState,
    SelectionToggle,
    SourceOutcome,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, CommandResult, ErrorResponse, ErrorType};
