use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use lughat_types::PingResponse;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod batch;
pub mod entries;
pub mod languages;
pub mod lookup;
pub mod search;

pub type SharedState = Arc<AppState>;

pub fn build_router(state: SharedState) -> Router {
    let admin = Router::new()
        .route("/languages", get(languages::list_languages))
        .route("/dictionary", post(entries::create_entry))
        .route("/dictionary/batch", post(batch::batch_create))
        .route("/dictionary/:language", get(entries::list_entries))
        .route(
            "/dictionary/:language/:word",
            get(entries::get_entry)
                .put(entries::update_entry)
                .delete(entries::delete_entry),
        )
        .route("/dictionary-search", get(search::search));

    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/dictionary", post(lookup::lookup))
        .nest("/api/admin", admin)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn ping(State(state): State<SharedState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.config.ping_message.clone(),
    })
}
