// src/application/commands/search_commands.rs
//
// Search Command Handlers
//
// RULES:
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::*,
    error_handling::{CommandResult, ToErrorResponse},
    state::AppState,
};
use crate::domain::SortOption;

use super::parse_sort;

/// Preset terms offered as one-click searches
pub const QUICK_SEARCHES: [&str; 9] = [
    "sculpture",
    "modern art",
    "photography",
    "landscapes",
    "portraits",
    "victorian art",
    "pottery",
    "fine art",
    "ancient art",
];

pub fn quick_searches() -> Vec<&'static str> {
    QUICK_SEARCHES.to_vec()
}

pub fn list_sort_options() -> Vec<SortOptionDto> {
    SortOption::ALL.into_iter().map(SortOptionDto::from).collect()
}

/// Start a new search and return the first page
pub async fn search_artworks(
    state: &AppState,
    term: &str,
    sort: Option<&str>,
) -> CommandResult<SearchViewDto> {
    let sort = parse_sort(sort)?;
    state.search_service.search(term).await.to_error_response()?;
    Ok(build_search_view(state, sort))
}

/// Fetch the next page for the current term
pub async fn load_more_artworks(state: &AppState) -> CommandResult<LoadResultDto> {
    let outcome = state.search_service.load_more().await.to_error_response()?;
    Ok(LoadResultDto::from_outcome(
        outcome,
        state.search_service.pagination_state(),
    ))
}

/// Current results, optionally sorted. Stored order is untouched.
pub fn get_search_view(state: &AppState, sort: Option<&str>) -> CommandResult<SearchViewDto> {
    let sort = parse_sort(sort)?;
    Ok(build_search_view(state, sort))
}

fn build_search_view(state: &AppState, sort: Option<SortOption>) -> SearchViewDto {
    let collection = &state.collection_service;
    let artworks = state
        .search_service
        .sorted_results(sort)
        .iter()
        .map(|artwork| {
            ArtworkDto::with_flags(
                artwork,
                collection.is_in_collection(&artwork.id),
                collection.is_selected(&artwork.id),
            )
        })
        .collect();

    SearchViewDto {
        term: state.search_service.term(),
        view: state.search_service.view_state(),
        pagination: state.search_service.pagination_state(),
        sort,
        artworks,
        notices: state.activity.drain(),
    }
}
