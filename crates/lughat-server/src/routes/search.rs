use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use lughat_types::{SearchParams, SearchResponse};

use super::SharedState;
use crate::error::ApiError;

pub async fn search(
    State(state): State<SharedState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query?;
    let (language, query) = params.validate()?;
    let results = state.store.read().await.search(&language, &query)?;
    Ok(Json(SearchResponse::new(language, query, results)))
}
