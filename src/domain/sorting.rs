// src/domain/sorting.rs
//
// Sort options offered by the result and collection views.
// Sorting always produces a new ordering; callers keep their own
// accumulation order untouched.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::artwork::Artwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    ArtistAsc,
    ArtistDesc,
    TitleAsc,
    TitleDesc,
    DateAsc,
    DateDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::ArtistAsc,
        SortOption::ArtistDesc,
        SortOption::TitleAsc,
        SortOption::TitleDesc,
        SortOption::DateAsc,
        SortOption::DateDesc,
    ];

    /// Token used by the sort selector
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::ArtistAsc => "artist-asc",
            SortOption::ArtistDesc => "artist-desc",
            SortOption::TitleAsc => "title-asc",
            SortOption::TitleDesc => "title-desc",
            SortOption::DateAsc => "date-asc",
            SortOption::DateDesc => "date-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::ArtistAsc => "Artist Name (A → Z)",
            SortOption::ArtistDesc => "Artist Name (Z → A)",
            SortOption::TitleAsc => "Artwork Name (A → Z)",
            SortOption::TitleDesc => "Artwork Name (Z → A)",
            SortOption::DateAsc => "Creation Date (Oldest First)",
            SortOption::DateDesc => "Creation Date (Newest First)",
        }
    }

    /// Parse a selector token. Empty or unknown tokens mean "no sorting".
    pub fn from_token(token: &str) -> Option<SortOption> {
        let token = token.trim();
        Self::ALL.into_iter().find(|option| option.as_str() == token)
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Return `artworks` ordered by `option`. `None` keeps the given order.
/// The sort is stable, so ties keep their incoming relative order.
/// Text keys are lowercased once per artwork.
pub fn sort_artworks<'a, I>(artworks: I, option: Option<SortOption>) -> Vec<Artwork>
where
    I: IntoIterator<Item = &'a Artwork>,
{
    let mut sorted: Vec<Artwork> = artworks.into_iter().cloned().collect();
    match option {
        None => {}
        Some(SortOption::ArtistAsc) => sorted.sort_by_cached_key(|a| a.creator.to_lowercase()),
        Some(SortOption::ArtistDesc) => {
            sorted.sort_by_cached_key(|a| Reverse(a.creator.to_lowercase()))
        }
        Some(SortOption::TitleAsc) => sorted.sort_by_cached_key(|a| a.title.to_lowercase()),
        Some(SortOption::TitleDesc) => {
            sorted.sort_by_cached_key(|a| Reverse(a.title.to_lowercase()))
        }
        Some(SortOption::DateAsc) => {
            sorted.sort_by(|a, b| a.parsed_date.total_cmp(&b.parsed_date))
        }
        Some(SortOption::DateDesc) => {
            sorted.sort_by(|a, b| b.parsed_date.total_cmp(&a.parsed_date))
        }
    }
    sorted
}
