use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lughat_core::{ErrorKind, StoreError};
use lughat_types::ErrorResponse;

/// Error body plus status for every failing handler
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MissingParameter | ErrorKind::InvalidPayload => StatusCode::BAD_REQUEST,
        ErrorKind::LanguageNotFound | ErrorKind::WordNotFound => StatusCode::NOT_FOUND,
        ErrorKind::DuplicateWord => StatusCode::CONFLICT,
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self {
            status: status_for(err.kind()),
            message: err.to_string(),
        }
    }
}

// Undecodable bodies are client errors like any other invalid payload
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        StoreError::InvalidPayload(rejection.body_text()).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        StoreError::InvalidPayload(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        StoreError::InvalidPayload(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("{} {}", self.status, self.message);
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
