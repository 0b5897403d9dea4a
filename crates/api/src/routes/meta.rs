//! Static status endpoints.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// GET /
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Creator directory API running",
    })
}

/// GET /api/hello
async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the creator directory backend!",
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/hello", get(hello))
}
