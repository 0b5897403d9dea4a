//! Database-connectivity diagnostics.
//!
//! Best-effort status report for operators: configuration presence,
//! connection state, and a sample of collection names. Every failure is
//! reported inside the body; this endpoint never returns an error
//! response.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Most collection names included in a report.
const MAX_COLLECTIONS: usize = 10;

/// Longest error detail echoed back to the client.
const MAX_ERROR_LEN: usize = 50;

#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    /// Always `"running"`: if this response was produced, the backend is up.
    pub backend: &'static str,
    /// Store status: `"not configured"`, `"available"`, `"ok"`, or an
    /// `"error: ..."` detail.
    pub database: String,
    /// Whether `DATABASE_URL` is set. Never the value itself.
    pub database_url_set: bool,
    /// Whether `DATABASE_NAME` is set. Never the value itself.
    pub database_name_set: bool,
    pub connection_status: &'static str,
    /// Up to ten collection names.
    pub collections: Vec<String>,
}

fn truncated(detail: &str) -> String {
    let mut detail = detail.to_string();
    if detail.len() > MAX_ERROR_LEN {
        let mut end = MAX_ERROR_LEN;
        while !detail.is_char_boundary(end) {
            end -= 1;
        }
        detail.truncate(end);
    }
    detail
}

/// GET /test
async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running",
        database: "not configured".to_string(),
        database_url_set: state.config.database_url.is_some(),
        database_name_set: state.config.database_name.is_some(),
        connection_status: "not connected",
        collections: Vec::new(),
    };

    if let Some(store) = &state.store {
        report.database = "available".to_string();
        report.connection_status = "connected";
        match store.list_collections().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = "ok".to_string();
            }
            Err(err) => {
                report.database = format!("error: {}", truncated(&err.to_string()));
            }
        }
    }

    Json(report)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/test", get(diagnostics))
}
