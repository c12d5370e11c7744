use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use lughat_types::{BatchCreateRequest, BatchResponse};

use super::SharedState;
use crate::error::ApiError;

/// Partial success is still 201; per-item skips are listed in `results.errors`
pub async fn batch_create(
    State(state): State<SharedState>,
    payload: Result<Json<BatchCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BatchResponse>), ApiError> {
    let Json(request) = payload?;
    let (language, entries) = request.validate()?;

    let report = state.store.write().await.batch_create_items(&language, entries);
    tracing::info!(
        "Batch into {}: {} created, {} skipped",
        language,
        report.created_count,
        report.skipped_count
    );

    Ok((StatusCode::CREATED, Json(BatchResponse::new(language, report))))
}
