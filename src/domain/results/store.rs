use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::artwork::{Artwork, SourceKind};
use crate::domain::sorting::{sort_artworks, SortOption};

/// Pagination cursor state for the active search term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationState {
    /// No search has been started
    Idle,
    /// A page request is outstanding
    Loading,
    /// At least one source may have further pages
    More,
    /// Every source has run out of pages
    Exhausted,
}

/// What a caller needs to fetch the next page
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub term: String,
    pub page: u32,
    pub exhausted_sources: Vec<SourceKind>,
}

/// Result of handing a fetched page back to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommit {
    /// Page belonged to the current search and was merged
    Applied { added: usize, state: PaginationState },
    /// Page belonged to a search that has since been replaced
    Stale,
}

/// Running list of artworks for the active search term.
///
/// Stored order is accumulation order (first fetched first) and is never
/// changed by sorting. Every insertion path goes through the id set, so
/// overlapping or repeated pages cannot introduce duplicates.
#[derive(Debug, Clone)]
pub struct ResultStore {
    term: Option<String>,
    artworks: Vec<Artwork>,
    ids: HashSet<String>,
    generation: u64,
    state: PaginationState,
    next_page: u32,
    exhausted_sources: HashSet<SourceKind>,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            term: None,
            artworks: Vec::new(),
            ids: HashSet::new(),
            generation: 0,
            state: PaginationState::Idle,
            next_page: 1,
            exhausted_sources: HashSet::new(),
        }
    }

    // ========================================================================
    // LIST OPERATIONS
    // ========================================================================

    /// Reset the list to `artworks` (deduplicated, order kept)
    pub fn replace(&mut self, artworks: Vec<Artwork>) -> usize {
        self.artworks.clear();
        self.ids.clear();
        self.append(artworks)
    }

    /// Merge new artworks, skipping any id already held. Returns how many
    /// were added.
    pub fn append(&mut self, artworks: Vec<Artwork>) -> usize {
        let before = self.artworks.len();
        for artwork in artworks {
            if self.ids.insert(artwork.id.clone()) {
                self.artworks.push(artwork);
            }
        }
        self.artworks.len() - before
    }

    /// New ordered copy; `None` yields accumulation order
    pub fn sorted_view(&self, option: Option<SortOption>) -> Vec<Artwork> {
        sort_artworks(&self.artworks, option)
    }

    /// Swap in a newer copy of an artwork already held, by id
    pub fn replace_artwork(&mut self, artwork: Artwork) -> bool {
        if !self.ids.contains(&artwork.id) {
            return false;
        }
        match self.artworks.iter_mut().find(|a| a.id == artwork.id) {
            Some(slot) => {
                *slot = artwork;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Artwork> {
        if !self.ids.contains(id) {
            return None;
        }
        self.artworks.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    // ========================================================================
    // PAGINATION STATE MACHINE
    // ========================================================================

    /// Start a new search term: clears the list, resets exhaustion and
    /// invalidates every page still in flight for older terms.
    pub fn begin_search(&mut self, term: &str) -> PageRequest {
        self.generation += 1;
        self.term = Some(term.to_string());
        self.artworks.clear();
        self.ids.clear();
        self.exhausted_sources.clear();
        self.next_page = 1;
        self.state = PaginationState::Loading;

        PageRequest {
            generation: self.generation,
            term: term.to_string(),
            page: self.next_page,
            exhausted_sources: Vec::new(),
        }
    }

    /// Claim the next page. `None` while a request is outstanding, once
    /// exhausted, or before any search (single-flight guard).
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if self.state != PaginationState::More {
            return None;
        }
        let term = self.term.clone()?;
        self.state = PaginationState::Loading;

        let mut exhausted: Vec<SourceKind> = self.exhausted_sources.iter().copied().collect();
        exhausted.sort();

        Some(PageRequest {
            generation: self.generation,
            term,
            page: self.next_page,
            exhausted_sources: exhausted,
        })
    }

    /// Merge a fetched page if it still belongs to the current search
    pub fn complete_page(
        &mut self,
        generation: u64,
        artworks: Vec<Artwork>,
        newly_exhausted: &[SourceKind],
    ) -> PageCommit {
        if generation != self.generation {
            return PageCommit::Stale;
        }

        let added = self.append(artworks);
        self.exhausted_sources.extend(newly_exhausted.iter().copied());
        self.next_page += 1;
        self.state = if self.all_sources_exhausted() {
            PaginationState::Exhausted
        } else {
            PaginationState::More
        };

        PageCommit::Applied {
            added,
            state: self.state,
        }
    }

    /// Release the single-flight claim after a failed fetch so the same
    /// page can be requested again.
    pub fn fail_page(&mut self, generation: u64) -> PageCommit {
        if generation != self.generation {
            return PageCommit::Stale;
        }
        self.state = PaginationState::More;
        PageCommit::Applied {
            added: 0,
            state: self.state,
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == PaginationState::Loading
    }

    pub fn has_more(&self) -> bool {
        self.state == PaginationState::More
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn is_source_exhausted(&self, source: SourceKind) -> bool {
        self.exhausted_sources.contains(&source)
    }

    fn all_sources_exhausted(&self) -> bool {
        SourceKind::ALL
            .iter()
            .all(|kind| self.exhausted_sources.contains(kind))
    }
}
