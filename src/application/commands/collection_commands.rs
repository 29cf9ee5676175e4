// src/application/commands/collection_commands.rs
//
// Collection and Item Command Handlers
//
// RULES:
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::*,
    error_handling::{CommandResult, ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::services::SelectionToggle;

use super::parse_sort;

/// Select or deselect an artwork from the current view
pub fn toggle_selection(state: &AppState, artwork_id: &str) -> CommandResult<SelectionToggle> {
    let artwork = state
        .collection_service
        .find_artwork(artwork_id)
        .ok_or_else(|| ErrorResponse::not_found("Artwork"))?;

    Ok(state.collection_service.toggle_selection(artwork))
}

/// Save every selected artwork into the collection
pub fn save_selection(state: &AppState) -> CommitResultDto {
    state.collection_service.commit_selection().into()
}

pub fn remove_from_collection(state: &AppState, artwork_id: &str) -> bool {
    state.collection_service.remove(artwork_id)
}

pub fn get_collection(state: &AppState, sort: Option<&str>) -> CommandResult<CollectionDto> {
    let sort = parse_sort(sort)?;
    let artworks: Vec<ArtworkDto> = state
        .collection_service
        .collection(sort)
        .iter()
        .map(|artwork| ArtworkDto::with_flags(artwork, true, false))
        .collect();

    Ok(CollectionDto {
        sort,
        count: artworks.len(),
        artworks,
    })
}

/// Open the item view, loading deferred details on the first visit
pub async fn view_item(state: &AppState, artwork_id: &str) -> CommandResult<ItemDetailDto> {
    let service = &state.collection_service;

    service.view_item(artwork_id).to_error_response()?;
    let outcome = service.enrich(artwork_id).await.to_error_response()?;

    let artwork = service
        .find_artwork(artwork_id)
        .ok_or_else(|| ErrorResponse::not_found("Artwork"))?;

    Ok(ItemDetailDto {
        artwork: ArtworkDto::with_flags(
            &artwork,
            service.is_in_collection(artwork_id),
            service.is_selected(artwork_id),
        ),
        detail: DetailStatus::from_outcome(&outcome),
    })
}
