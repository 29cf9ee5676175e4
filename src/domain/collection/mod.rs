//! Critical Collection Invariants:
//!
//! 1. A collection never holds two artworks with the same id
//! 2. Collection order is the order artworks were saved
//! 3. The selection set is cleared entirely on commit
//! 4. Collections live for the session only; nothing is persisted

pub mod entity;

pub use entity::{Collection, SelectionSet};

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult};

/// Validates Collection invariants
pub fn validate_collection(collection: &Collection) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(collection.len());
    for item in collection.items() {
        if !seen.insert(item.id.as_str()) {
            return Err(DomainError::InvariantViolation(format!(
                "Collection holds artwork '{}' more than once",
                item.id
            )));
        }
    }
    Ok(())
}
