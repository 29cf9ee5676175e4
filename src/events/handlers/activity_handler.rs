// events/handlers/activity_handler.rs
//
// Activity handler
//
// Turns curator events into short notices for the front end and into log
// lines for diagnostics. Partial-result and enrichment failures never
// reach the user as errors; this is where they become visible at all.
//
// RULES:
// - No business logic; handlers only observe
// - Handlers must not emit further events

use std::sync::{Arc, Mutex};

use crate::events::types::{
    ArtworkEnriched, ArtworkRemoved, EnrichmentFailed, SearchDiscarded, SearchPageLoaded,
    SelectionCommitted, SourceFetchFailed,
};
use crate::events::EventBus;

/// Notices collected since the front end last drained them
#[derive(Debug, Default)]
pub struct ActivityLog {
    notices: Mutex<Vec<String>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, notice: String) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Take all pending notices, oldest first
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(
            &mut *self
                .notices
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

// ============================================================================
// HANDLER REGISTRATION
// ============================================================================

pub fn register_activity_handlers(bus: &EventBus, activity: Arc<ActivityLog>) {
    bus.subscribe::<SourceFetchFailed, _>(|event| {
        log::warn!(
            "[ACTIVITY] {} unavailable for '{}' page {}: {}",
            event.museum,
            event.term,
            event.page,
            event.message
        );
    });

    // Only committed pages reach the user; stale and fully failed ones never do
    let notices = Arc::clone(&activity);
    bus.subscribe::<SearchPageLoaded, _>(move |event| {
        log::info!(
            "[ACTIVITY] '{}' page {}: {} new artworks{}",
            event.term,
            event.page,
            event.added,
            if event.exhausted { " (no more results)" } else { "" }
        );
        for museum in &event.unavailable {
            notices.push(format!(
                "{} is unavailable right now; showing results from the other museum",
                museum
            ));
        }
    });

    bus.subscribe::<SearchDiscarded, _>(|event| {
        log::debug!(
            "[ACTIVITY] Discarded stale page {} for '{}'",
            event.page,
            event.term
        );
    });

    let notices = Arc::clone(&activity);
    bus.subscribe::<SelectionCommitted, _>(move |event| {
        log::info!(
            "[ACTIVITY] Saved {} artworks ({} already collected)",
            event.added_ids.len(),
            event.skipped
        );
        if !event.added_ids.is_empty() {
            notices.push(format!(
                "Added {} artwork{} to your collection",
                event.added_ids.len(),
                if event.added_ids.len() == 1 { "" } else { "s" }
            ));
        }
    });

    let notices = Arc::clone(&activity);
    bus.subscribe::<ArtworkRemoved, _>(move |event| {
        log::info!("[ACTIVITY] Removed {} from collection", event.artwork_id);
        notices.push("Removed artwork from your collection".to_string());
    });

    bus.subscribe::<ArtworkEnriched, _>(|event| {
        log::debug!(
            "[ACTIVITY] Enriched {} (results: {}, collection: {})",
            event.artwork_id,
            event.in_results,
            event.in_collection
        );
    });

    bus.subscribe::<EnrichmentFailed, _>(|event| {
        log::warn!(
            "[ACTIVITY] Could not load details for {}: {}",
            event.artwork_id,
            event.message
        );
    });

    log::debug!("[ACTIVITY] Handlers registered");
}
