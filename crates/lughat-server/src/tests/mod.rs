mod state_tests;

use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use lughat_config::Config;
use lughat_core::{DictionaryStore, SeedLoader};
use serde_json::Value;
use tower::ServiceExt;

use crate::routes::build_router;
use crate::state::AppState;

/// Router over the bundled seed data
pub(crate) fn seeded_router() -> Router {
    let data = SeedLoader::load_embedded().expect("embedded seed parses");
    router_with(DictionaryStore::from_data(data))
}

pub(crate) fn router_with(store: DictionaryStore) -> Router {
    let state = Arc::new(AppState::new(Config::default(), store));
    build_router(state)
}

/// Send one request and decode the JSON body
pub(crate) async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub(crate) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub(crate) fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub(crate) fn json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
