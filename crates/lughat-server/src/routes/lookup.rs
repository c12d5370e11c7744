use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lughat_types::{LookupRequest, LookupResponse};

use super::SharedState;
use crate::error::ApiError;

/// Translator-facing lookup; echoes the word as the caller spelled it
pub async fn lookup(
    State(state): State<SharedState>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<LookupResponse>, ApiError> {
    let Json(request) = payload?;
    let (language, word) = request.validate()?;

    let entry = state.store.read().await.lookup(&language, &word)?;
    Ok(Json(LookupResponse::new(language, word, entry)))
}
