#![allow(dead_code)] // each test binary uses its own subset of these helpers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use creatorhub_api::config::ServerConfig;
use creatorhub_api::router::build_app_router;
use creatorhub_api::state::AppState;
use creatorhub_db::memory::MemStore;
use creatorhub_db::DocumentStore;

/// Config resembling a fully configured deployment. The store used by the
/// tests is injected separately, so the database values are never dialed.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: Some("postgres://localhost:5432".to_string()),
        database_name: Some("creatorhub".to_string()),
    }
}

/// Full application router with all middleware layers and the given store.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same stack (CORS, request ID, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(store: Arc<dyn DocumentStore>) -> Router {
    let state = AppState {
        store: Some(store),
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Router in the "database not configured" state.
pub fn build_unconfigured_app() -> Router {
    let state = AppState {
        store: None,
        config: Arc::new(ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: None,
            database_name: None,
        }),
    };
    build_app_router(state)
}

/// Fresh in-memory store.
pub fn mem_store() -> Arc<MemStore> {
    Arc::new(MemStore::new())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
