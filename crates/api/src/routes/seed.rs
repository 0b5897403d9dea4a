//! Handler for the idempotent seeding endpoint.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use creatorhub_db::seed::{seed_catalog, SeedOutcome};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /seed
///
/// Inserts whichever demo-catalog records are not already present and
/// reports how many were created. Safe to call repeatedly.
async fn seed(State(state): State<AppState>) -> AppResult<Json<SeedOutcome>> {
    let store = state.store()?;
    let outcome = seed_catalog(store.as_ref()).await?;
    Ok(Json(outcome))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/seed", post(seed))
}
