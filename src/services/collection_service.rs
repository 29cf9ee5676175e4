// src/services/collection_service.rs
//
// Collection Service - selection, saved collection and enrichment
//
// CRITICAL RULES:
// - Already-collected artworks cannot be selected
// - Committing clears the selection unconditionally
// - Every cross-store update is by id, never by position
// - Enrichment is attempted at most once per artwork per item view
// - Enrichment failures leave every copy untouched and are not retried
// - Details already held by the collection are reused, never refetched
// - No lock is held across a detail fetch

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::lock;
use crate::domain::{
    sort_artworks, validate_collection, Artwork, ArtworkDetail, Collection, ResultStore,
    SelectionSet, SortOption, SourceKind,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    ArtworkEnriched, ArtworkRemoved, EnrichmentFailed, EventBus, SelectionCommitted,
};
use crate::integrations::ArtworkDetailFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionToggle {
    Selected,
    Deselected,
    /// Rejected: the artwork is already in the collection
    AlreadyCollected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    pub added: Vec<String>,
    /// Selected artworks that were already collected
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnrichOutcome {
    Enriched(Artwork),
    /// Source supplies details at search time, or the artwork already has them
    NotNeeded,
    /// Already tried during this item view
    AlreadyAttempted,
    /// Fetch failed; the artwork keeps its missing fields
    Failed(String),
}

#[derive(Debug, Default)]
struct CollectionState {
    collection: Collection,
    selection: SelectionSet,
    enrichment_attempted: HashSet<String>,
}

pub struct CollectionService {
    results: Arc<Mutex<ResultStore>>,
    state: Mutex<CollectionState>,
    detail_fetchers: HashMap<SourceKind, Arc<dyn ArtworkDetailFetcher>>,
    event_bus: Arc<EventBus>,
}

impl CollectionService {
    pub fn new(
        results: Arc<Mutex<ResultStore>>,
        detail_fetchers: HashMap<SourceKind, Arc<dyn ArtworkDetailFetcher>>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            results,
            state: Mutex::new(CollectionState::default()),
            detail_fetchers,
            event_bus,
        }
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    pub fn toggle_selection(&self, artwork: Artwork) -> SelectionToggle {
        let mut state = lock(&self.state);
        if state.collection.contains(&artwork.id) {
            log::debug!("Ignoring selection of collected artwork {}", artwork.id);
            return SelectionToggle::AlreadyCollected;
        }

        if state.selection.toggle(artwork) {
            SelectionToggle::Selected
        } else {
            SelectionToggle::Deselected
        }
    }

    /// Move the pending selection into the collection, first selected first
    pub fn commit_selection(&self) -> CommitSummary {
        let mut summary = CommitSummary::default();
        {
            let mut state = lock(&self.state);
            if state.selection.is_empty() {
                return summary;
            }

            for artwork in state.selection.drain() {
                let id = artwork.id.clone();
                if state.collection.add(artwork) {
                    summary.added.push(id);
                } else {
                    summary.skipped += 1;
                }
            }
            debug_assert!(validate_collection(&state.collection).is_ok());
        }

        self.event_bus.emit(SelectionCommitted::new(
            summary.added.clone(),
            summary.skipped,
        ));
        summary
    }

    pub fn is_selected(&self, id: &str) -> bool {
        lock(&self.state).selection.contains(id)
    }

    pub fn selection(&self) -> Vec<Artwork> {
        lock(&self.state).selection.items().to_vec()
    }

    // ========================================================================
    // COLLECTION
    // ========================================================================

    /// Remove by id. Absent ids are a no-op.
    pub fn remove(&self, id: &str) -> bool {
        let removed = lock(&self.state).collection.remove(id).is_some();
        if removed {
            self.event_bus.emit(ArtworkRemoved::new(id.to_string()));
        }
        removed
    }

    /// Swap in a newer copy of a collected artwork
    pub fn update_collection_item(&self, artwork: Artwork) -> bool {
        lock(&self.state).collection.replace(artwork)
    }

    pub fn is_in_collection(&self, id: &str) -> bool {
        lock(&self.state).collection.contains(id)
    }

    pub fn collection(&self, option: Option<SortOption>) -> Vec<Artwork> {
        sort_artworks(lock(&self.state).collection.items(), option)
    }

    // ========================================================================
    // ITEM VIEW
    // ========================================================================

    /// Look an artwork up in the current results, then the collection
    pub fn find_artwork(&self, id: &str) -> Option<Artwork> {
        if let Some(artwork) = lock(&self.results).get(id) {
            return Some(artwork.clone());
        }
        lock(&self.state).collection.get(id).cloned()
    }

    /// Open the item view for `id`. A fresh view allows one new
    /// enrichment attempt.
    pub fn view_item(&self, id: &str) -> AppResult<Artwork> {
        let artwork = self.find_artwork(id).ok_or(AppError::NotFound)?;
        lock(&self.state).enrichment_attempted.remove(id);
        Ok(artwork)
    }

    // ========================================================================
    // ENRICHMENT
    // ========================================================================

    /// Fetch the deferred detail fields for `id` and write them into every
    /// store holding a copy.
    pub async fn enrich(&self, id: &str) -> AppResult<EnrichOutcome> {
        let artwork = self.find_artwork(id).ok_or(AppError::NotFound)?;

        if !artwork.needs_enrichment() {
            return Ok(EnrichOutcome::NotNeeded);
        }
        let Some(fetcher) = self.detail_fetchers.get(&artwork.source).cloned() else {
            return Ok(EnrichOutcome::NotNeeded);
        };

        // A later search can bring back a bare copy of a saved artwork
        let saved = lock(&self.state)
            .collection
            .get(&artwork.id)
            .filter(|saved| !saved.needs_enrichment())
            .map(Artwork::detail);
        if let Some(detail) = saved {
            log::debug!("Reusing saved details for {}", artwork.id);
            return Ok(self.apply_detail(&artwork, detail));
        }

        if !lock(&self.state).enrichment_attempted.insert(artwork.id.clone()) {
            return Ok(EnrichOutcome::AlreadyAttempted);
        }

        match fetcher.fetch_detail(&artwork).await {
            Ok(detail) => Ok(self.apply_detail(&artwork, detail)),
            Err(err) => {
                log::warn!("Enrichment failed for {}: {}", artwork.id, err);
                self.event_bus
                    .emit(EnrichmentFailed::new(artwork.id.clone(), err.to_string()));
                Ok(EnrichOutcome::Failed(err.to_string()))
            }
        }
    }

    /// Merge `detail` into each store's current copy of the artwork
    fn apply_detail(&self, fetched_for: &Artwork, detail: ArtworkDetail) -> EnrichOutcome {
        let id = fetched_for.id.as_str();

        let in_results = {
            let mut results = lock(&self.results);
            let enriched = results.get(id).map(|current| current.enriched_with(detail.clone()));
            enriched.is_some_and(|enriched| results.replace_artwork(enriched))
        };

        let in_collection = {
            let mut state = lock(&self.state);

            let selected = state
                .selection
                .items()
                .iter()
                .find(|item| item.id == id)
                .map(|current| current.enriched_with(detail.clone()));
            if let Some(enriched) = selected {
                state.selection.replace(enriched);
            }

            let collected = state
                .collection
                .get(id)
                .map(|current| current.enriched_with(detail.clone()));
            collected.is_some_and(|enriched| state.collection.replace(enriched))
        };

        self.event_bus.emit(ArtworkEnriched::new(
            id.to_string(),
            in_results,
            in_collection,
        ));

        EnrichOutcome::Enriched(
            self.find_artwork(id)
                .unwrap_or_else(|| fetched_for.enriched_with(detail)),
        )
    }
}
