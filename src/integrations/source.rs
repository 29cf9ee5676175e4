// src/integrations/source.rs
//
// Seams between services and the museum APIs.
//
// RULES:
// - Implementations return canonical Artwork values only
// - Request construction is separate from the network call so a bad
//   request fails the whole search before anything is sent

use async_trait::async_trait;
use reqwest::Url;

use crate::domain::{Artwork, ArtworkDetail, SourceKind};
use crate::error::AppResult;

/// One normalized search page from a single source
#[derive(Debug, Clone, Default)]
pub struct SourcePage {
    pub artworks: Vec<Artwork>,
    /// Records the source returned, including any that were skipped while
    /// normalizing. Compared against the page size to detect exhaustion.
    pub record_count: usize,
}

#[async_trait]
pub trait MuseumSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Records requested per page
    fn page_size(&self) -> u32;

    /// Build the search URL for a 1-based page number
    fn search_url(&self, term: &str, page: u32) -> AppResult<Url>;

    /// Fetch and normalize one page
    async fn fetch_page(&self, url: Url) -> AppResult<SourcePage>;
}

/// Fetches the detail fields a source leaves out of its search results
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtworkDetailFetcher: Send + Sync {
    async fn fetch_detail(&self, artwork: &Artwork) -> AppResult<ArtworkDetail>;
}
