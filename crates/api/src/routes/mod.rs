//! Route modules.
//!
//! Each submodule owns one resource and exposes a `router()` that the
//! application router merges. Handlers read the store through
//! [`crate::state::AppState`] and map errors via
//! [`crate::error::AppError`].

pub mod creators;
pub mod diagnostics;
pub mod meta;
pub mod seed;
pub mod segments;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree.
///
/// ```text
/// GET  /              fixed status message
/// GET  /api/hello     fixed greeting
/// GET  /test          database diagnostics (never fails)
/// POST /seed          idempotent demo-catalog seeding
/// GET  /segments      list all segments
/// GET  /top-creators  top creators by follower count
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(meta::router())
        .merge(diagnostics::router())
        .merge(seed::router())
        .merge(segments::router())
        .merge(creators::router())
}
