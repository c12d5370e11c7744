use axum::Json;
use axum::extract::State;
use lughat_types::LanguagesResponse;

use super::SharedState;

pub async fn list_languages(State(state): State<SharedState>) -> Json<LanguagesResponse> {
    let summaries = state.store.read().await.list_languages();
    Json(LanguagesResponse::new(summaries))
}
