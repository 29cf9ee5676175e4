// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod artwork;
pub mod collection;
pub mod historical_date;
pub mod results;
pub mod sorting;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Artwork Domain
pub use artwork::{validate_artwork, Artwork, ArtworkDetail, SourceKind, UNKNOWN_CREATOR, UNTITLED};

// Collection Domain
pub use collection::{validate_collection, Collection, SelectionSet};

// Date parsing
pub use historical_date::{parse_historical_date, DateEstimate, DateForm, HistoricalDateRules};

// Search results
pub use results::{PageCommit, PageRequest, PaginationState, ResultStore};

// Sorting
pub use sorting::{sort_artworks, SortOption};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
