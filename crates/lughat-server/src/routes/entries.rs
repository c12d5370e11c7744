use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use lughat_types::{
    CreateEntryRequest, DeleteResponse, EntriesResponse, EntryMutationResponse, EntryResponse,
    UpdateEntryRequest,
};

use super::SharedState;
use crate::error::ApiError;

pub async fn list_entries(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let Path(language) = path?;
    let entries = state.store.read().await.list_entries(&language)?;
    Ok(Json(EntriesResponse::new(language, entries)))
}

pub async fn get_entry(
    State(state): State<SharedState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<EntryResponse>, ApiError> {
    let Path((language, word)) = path?;
    let entry = state.store.read().await.get_entry(&language, &word)?;
    Ok(Json(EntryResponse::new(language, entry)))
}

pub async fn create_entry(
    State(state): State<SharedState>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EntryMutationResponse>), ApiError> {
    let Json(request) = payload?;
    let create = request.validate()?;

    let entry = state
        .store
        .write()
        .await
        .create_entry(&create.language, &create.word, create.senses)?;
    tracing::info!("Created '{}' in {}", entry.word, create.language);

    Ok((
        StatusCode::CREATED,
        Json(EntryMutationResponse::created(create.language, entry)),
    ))
}

pub async fn update_entry(
    State(state): State<SharedState>,
    path: Result<Path<(String, String)>, PathRejection>,
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Result<Json<EntryMutationResponse>, ApiError> {
    let Path((language, word)) = path?;
    let Json(request) = payload?;
    let senses = request.validate()?;

    let entry = state
        .store
        .write()
        .await
        .update_entry(&language, &word, senses)?;
    tracing::info!("Updated '{}' in {}", entry.word, language);

    Ok(Json(EntryMutationResponse::updated(language, entry)))
}

pub async fn delete_entry(
    State(state): State<SharedState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path((language, word)) = path?;
    state.store.write().await.delete_entry(&language, &word)?;
    tracing::info!("Deleted '{}' from {}", word, language);

    Ok(Json(DeleteResponse::new(language, word)))
}
