//! Handler for the `/top-creators` listing.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use creatorhub_core::creator::CreatorSummary;
use creatorhub_db::{DocumentQuery, CREATOR_COLLECTION};

use crate::error::AppResult;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 8;

#[derive(Debug, Deserialize)]
struct TopCreatorsParams {
    /// Filter by segment slug. An empty value means no filter.
    segment: Option<String>,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// GET /top-creators?segment=&limit=
///
/// Creators sorted by follower count descending, optionally restricted to
/// one segment, truncated to `limit` (default 8). Ties keep store order.
async fn top_creators(
    State(state): State<AppState>,
    Query(params): Query<TopCreatorsParams>,
) -> AppResult<Json<Vec<CreatorSummary>>> {
    let store = state.store()?;

    let segment = params.segment.filter(|slug| !slug.is_empty());
    let query = DocumentQuery {
        array_contains: segment.map(|slug| ("segments".to_string(), slug)),
        sort_desc_by: Some("followers".to_string()),
        limit: Some(params.limit.max(0)),
    };

    let docs = store.query(CREATOR_COLLECTION, query).await?;
    let creators = docs
        .iter()
        .map(|doc| CreatorSummary::from_document(doc.id.to_string(), &doc.data))
        .collect();
    Ok(Json(creators))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/top-creators", get(top_creators))
}
