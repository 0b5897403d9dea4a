//! Handler for the `/segments` listing.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use creatorhub_core::segment::SegmentSummary;
use creatorhub_db::SEGMENT_COLLECTION;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /segments
///
/// Every segment document, projected leniently, in store order.
async fn list_segments(State(state): State<AppState>) -> AppResult<Json<Vec<SegmentSummary>>> {
    let store = state.store()?;
    let docs = store.read_all(SEGMENT_COLLECTION).await?;
    let segments = docs
        .iter()
        .map(|doc| SegmentSummary::from_document(&doc.data))
        .collect();
    Ok(Json(segments))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/segments", get(list_segments))
}
