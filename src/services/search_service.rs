// src/services/search_service.rs
//
// Search Service - drives the result store from user actions
//
// CRITICAL RULES:
// - A new term always replaces the list; "load more" only ever appends
// - At most one page request is outstanding per term (single-flight)
// - Pages that come back for a replaced term are discarded, not merged
// - The store lock is never held across an await
// - Only total failures reach the caller as errors

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::lock;
use super::search_aggregator::SearchAggregator;
use crate::domain::{
    Artwork, PageCommit, PageRequest, PaginationState, ResultStore, SortOption, SourceKind,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SearchDiscarded, SearchPageLoaded, SearchStarted};

/// Result of a search or "load more" request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Page merged into the current results
    Appended {
        page: u32,
        added: usize,
        state: PaginationState,
    },
    /// Page arrived after the term changed and was dropped
    Discarded,
    /// Another page request is still in flight
    AlreadyLoading,
    /// Every source has run out, or no search has been made
    NothingMore,
}

/// What the results view should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SearchViewState {
    Idle,
    Loading,
    Empty,
    Results,
    Error(String),
}

pub struct SearchService {
    aggregator: Arc<SearchAggregator>,
    results: Arc<Mutex<ResultStore>>,
    last_error: Mutex<Option<String>>,
    event_bus: Arc<EventBus>,
}

impl SearchService {
    pub fn new(
        aggregator: Arc<SearchAggregator>,
        results: Arc<Mutex<ResultStore>>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            aggregator,
            results,
            last_error: Mutex::new(None),
            event_bus,
        }
    }

    /// Start a new search, replacing whatever was shown before
    pub async fn search(&self, term: &str) -> AppResult<LoadOutcome> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::InvalidRequest("search term is empty".to_string()));
        }

        let request = lock(&self.results).begin_search(term);
        *lock(&self.last_error) = None;

        log::info!("Searching for '{}'", term);
        self.event_bus
            .emit(SearchStarted::new(term.to_string(), request.generation));

        self.run(request).await
    }

    /// Fetch the next page for the current term
    pub async fn load_more(&self) -> AppResult<LoadOutcome> {
        let request = {
            let mut store = lock(&self.results);
            if store.is_loading() {
                return Ok(LoadOutcome::AlreadyLoading);
            }
            match store.begin_next_page() {
                Some(request) => request,
                None => return Ok(LoadOutcome::NothingMore),
            }
        };

        self.run(request).await
    }

    async fn run(&self, request: PageRequest) -> AppResult<LoadOutcome> {
        let fetched = self
            .aggregator
            .search_page(&request.term, request.page, &request.exhausted_sources)
            .await;

        let page = match fetched {
            Ok(page) => page,
            Err(err) => return self.fail(&request, err),
        };

        if page.all_failed() {
            let message = page
                .failures()
                .first()
                .map(|(_, message)| message.to_string())
                .unwrap_or_else(|| "every museum failed to respond".to_string());
            return self.fail(&request, AppError::SearchFailed(message));
        }

        let newly_exhausted = page.newly_exhausted();
        let unavailable: Vec<SourceKind> = page.failures().iter().map(|(kind, _)| *kind).collect();
        let commit =
            lock(&self.results).complete_page(request.generation, page.artworks, &newly_exhausted);

        match commit {
            PageCommit::Applied { added, state } => {
                self.event_bus.emit(SearchPageLoaded::new(
                    request.term,
                    request.page,
                    added,
                    state == PaginationState::Exhausted,
                    unavailable,
                ));
                Ok(LoadOutcome::Appended {
                    page: request.page,
                    added,
                    state,
                })
            }
            PageCommit::Stale => Ok(self.discard(request)),
        }
    }

    fn fail(&self, request: &PageRequest, err: AppError) -> AppResult<LoadOutcome> {
        if lock(&self.results).fail_page(request.generation) == PageCommit::Stale {
            return Ok(self.discard(request.clone()));
        }

        log::error!(
            "Search for '{}' page {} failed: {}",
            request.term,
            request.page,
            err
        );
        *lock(&self.last_error) = Some(err.to_string());
        Err(err)
    }

    fn discard(&self, request: PageRequest) -> LoadOutcome {
        log::debug!(
            "Dropping page {} for '{}': term is no longer current",
            request.page,
            request.term
        );
        self.event_bus
            .emit(SearchDiscarded::new(request.term, request.page));
        LoadOutcome::Discarded
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Shared store, also held by the collection service for enrichment
    pub fn results(&self) -> Arc<Mutex<ResultStore>> {
        Arc::clone(&self.results)
    }

    /// Current results in accumulation order, or sorted when an option is given
    pub fn sorted_results(&self, option: Option<SortOption>) -> Vec<Artwork> {
        lock(&self.results).sorted_view(option)
    }

    pub fn find(&self, id: &str) -> Option<Artwork> {
        lock(&self.results).get(id).cloned()
    }

    pub fn term(&self) -> Option<String> {
        lock(&self.results).term().map(str::to_string)
    }

    pub fn pagination_state(&self) -> PaginationState {
        lock(&self.results).state()
    }

    pub fn last_error(&self) -> Option<String> {
        lock(&self.last_error).clone()
    }

    pub fn view_state(&self) -> SearchViewState {
        let store = lock(&self.results);
        if !store.is_empty() {
            return SearchViewState::Results;
        }
        if let Some(message) = lock(&self.last_error).clone() {
            return SearchViewState::Error(message);
        }
        match store.state() {
            PaginationState::Idle => SearchViewState::Idle,
            PaginationState::Loading => SearchViewState::Loading,
            PaginationState::More | PaginationState::Exhausted => SearchViewState::Empty,
        }
    }
}
