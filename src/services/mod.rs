// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod collection_service;
pub mod search_aggregator;
pub mod search_service;

#[cfg(test)]
mod collection_service_tests;

use std::sync::{Mutex, MutexGuard};

pub use collection_service::{CollectionService, CommitSummary, EnrichOutcome, SelectionToggle};
pub use search_aggregator::{AggregatedPage, SearchAggregator, SourceOutcome};
pub use search_service::{LoadOutcome, SearchService, SearchViewState};

/// Lock shared state. A panic while holding the lock cannot leave the
/// stores half-updated, so a poisoned lock is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
