// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are front-end-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Artwork, PaginationState, SortOption};
use crate::services::{CommitSummary, EnrichOutcome, LoadOutcome, SearchViewState};

// ============================================================================
// ARTWORK DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDto {
    pub id: String,
    pub title: String,
    /// Human-readable museum name
    pub source: String,
    pub image_url: Option<String>,
    pub creator: String,
    pub date: String,
    pub sort_year: f64,
    pub url: Option<String>,
    pub description: Option<String>,
    pub materials: Option<String>,
    pub in_collection: bool,
    pub selected: bool,
}

impl ArtworkDto {
    pub fn with_flags(artwork: &Artwork, in_collection: bool, selected: bool) -> Self {
        Self {
            id: artwork.id.clone(),
            title: artwork.title.clone(),
            source: artwork.source.label().to_string(),
            image_url: artwork.image.clone(),
            creator: artwork.creator.clone(),
            date: artwork.date.clone(),
            sort_year: artwork.parsed_date,
            url: artwork.url.clone(),
            description: artwork.description.clone(),
            materials: artwork.materials.clone(),
            in_collection,
            selected,
        }
    }
}

impl From<&Artwork> for ArtworkDto {
    fn from(artwork: &Artwork) -> Self {
        Self::with_flags(artwork, false, false)
    }
}

// ============================================================================
// SEARCH DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchViewDto {
    pub term: Option<String>,
    pub view: SearchViewState,
    pub pagination: PaginationState,
    pub sort: Option<SortOption>,
    pub artworks: Vec<ArtworkDto>,
    /// Non-fatal notices such as a museum being unavailable
    pub notices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Appended,
    Discarded,
    AlreadyLoading,
    NothingMore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadResultDto {
    pub status: LoadStatus,
    pub page: Option<u32>,
    pub added: usize,
    pub has_more: bool,
}

impl LoadResultDto {
    pub fn from_outcome(outcome: LoadOutcome, pagination: PaginationState) -> Self {
        let (status, page, added) = match outcome {
            LoadOutcome::Appended { page, added, .. } => (LoadStatus::Appended, Some(page), added),
            LoadOutcome::Discarded => (LoadStatus::Discarded, None, 0),
            LoadOutcome::AlreadyLoading => (LoadStatus::AlreadyLoading, None, 0),
            LoadOutcome::NothingMore => (LoadStatus::NothingMore, None, 0),
        };

        Self {
            status,
            page,
            added,
            has_more: pagination == PaginationState::More,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptionDto {
    pub token: String,
    pub label: String,
}

impl From<SortOption> for SortOptionDto {
    fn from(option: SortOption) -> Self {
        Self {
            token: option.as_str().to_string(),
            label: option.label().to_string(),
        }
    }
}

// ============================================================================
// COLLECTION DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDto {
    pub sort: Option<SortOption>,
    pub count: usize,
    pub artworks: Vec<ArtworkDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResultDto {
    pub added: Vec<String>,
    pub already_collected: usize,
}

impl From<CommitSummary> for CommitResultDto {
    fn from(summary: CommitSummary) -> Self {
        Self {
            added: summary.added,
            already_collected: summary.skipped,
        }
    }
}

// ============================================================================
// ITEM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailStatus {
    Complete,
    Enriched,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetailDto {
    pub artwork: ArtworkDto,
    pub detail: DetailStatus,
}

impl DetailStatus {
    pub fn from_outcome(outcome: &EnrichOutcome) -> Self {
        match outcome {
            EnrichOutcome::Enriched(_) => DetailStatus::Enriched,
            EnrichOutcome::NotNeeded => DetailStatus::Complete,
            EnrichOutcome::AlreadyAttempted | EnrichOutcome::Failed(_) => DetailStatus::Unavailable,
        }
    }
}
