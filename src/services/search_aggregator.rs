// src/services/search_aggregator.rs
//
// Search Aggregator - one search page across every museum
//
// CRITICAL RULES:
// - Every request URL is built before anything is sent; a construction
//   error fails the whole call
// - Sources are fetched concurrently and every outcome is awaited
// - A failing source is logged and reported, never raised
// - Results are concatenated in source order; no cross-source sorting
// - Exhausted sources are skipped, the rest keep paging

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::{Artwork, SourceKind};
use crate::error::AppResult;
use crate::events::{EventBus, SourceFetchFailed};
use crate::integrations::MuseumSource;

/// What happened to one source for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Returned `count` usable artworks. `exhausted` when the source sent
    /// back fewer records than its page size.
    Fetched { count: usize, exhausted: bool },
    Failed(String),
    /// Not queried because it ran out of pages earlier
    Skipped,
}

/// Merged page plus the per-source outcomes behind it
#[derive(Debug, Clone, Default)]
pub struct AggregatedPage {
    pub artworks: Vec<Artwork>,
    pub outcomes: Vec<(SourceKind, SourceOutcome)>,
}

impl AggregatedPage {
    /// Sources that reported their last page in this round
    pub fn newly_exhausted(&self) -> Vec<SourceKind> {
        self.outcomes
            .iter()
            .filter_map(|(kind, outcome)| match outcome {
                SourceOutcome::Fetched { exhausted: true, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<(SourceKind, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(kind, outcome)| match outcome {
                SourceOutcome::Failed(message) => Some((*kind, message.as_str())),
                _ => None,
            })
            .collect()
    }

    /// True when at least one source was queried and every queried source failed
    pub fn all_failed(&self) -> bool {
        let mut queried = self
            .outcomes
            .iter()
            .filter(|(_, outcome)| *outcome != SourceOutcome::Skipped)
            .peekable();

        queried.peek().is_some()
            && queried.all(|(_, outcome)| matches!(outcome, SourceOutcome::Failed(_)))
    }
}

pub struct SearchAggregator {
    sources: Vec<Arc<dyn MuseumSource>>,
    event_bus: Arc<EventBus>,
}

impl SearchAggregator {
    pub fn new(sources: Vec<Arc<dyn MuseumSource>>, event_bus: Arc<EventBus>) -> Self {
        Self { sources, event_bus }
    }

    pub fn sources(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|source| source.kind()).collect()
    }

    /// Merged artworks for one page. Partial failures degrade to the
    /// surviving sources; a total failure is an empty list.
    pub async fn search(&self, term: &str, page: u32) -> AppResult<Vec<Artwork>> {
        Ok(self.search_page(term, page, &[]).await?.artworks)
    }

    /// Same as `search`, skipping `exhausted` sources and reporting what
    /// happened to each source.
    pub async fn search_page(
        &self,
        term: &str,
        page: u32,
        exhausted: &[SourceKind],
    ) -> AppResult<AggregatedPage> {
        // 1. Build every request up front
        let mut requests = Vec::new();
        for source in &self.sources {
            if exhausted.contains(&source.kind()) {
                continue;
            }
            let url = source.search_url(term, page)?;
            requests.push((Arc::clone(source), url));
        }

        // 2. Fire them all and wait for every outcome
        let responses = join_all(
            requests
                .iter()
                .map(|(source, url)| source.fetch_page(url.clone())),
        )
        .await;

        // 3. Merge in source order
        let mut result = AggregatedPage::default();
        let mut responses = requests.iter().zip(responses);

        for source in &self.sources {
            let kind = source.kind();
            if exhausted.contains(&kind) {
                result.outcomes.push((kind, SourceOutcome::Skipped));
                continue;
            }

            let Some((_, response)) = responses.next() else {
                break;
            };

            match response {
                Ok(fetched) => {
                    let exhausted = fetched.record_count < source.page_size() as usize;
                    result.outcomes.push((
                        kind,
                        SourceOutcome::Fetched {
                            count: fetched.artworks.len(),
                            exhausted,
                        },
                    ));
                    result.artworks.extend(fetched.artworks);
                }
                Err(err) => {
                    log::warn!("{} search failed for '{}' page {}: {}", kind, term, page, err);
                    self.event_bus.emit(SourceFetchFailed::new(
                        kind,
                        term.to_string(),
                        page,
                        err.to_string(),
                    ));
                    result.outcomes.push((kind, SourceOutcome::Failed(err.to_string())));
                }
            }
        }

        Ok(result)
    }
}
