use std::sync::Arc;

use creatorhub_db::DocumentStore;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the store handle is established once at startup and
/// shared read-only across requests.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle. `None` when the database is not configured.
    pub store: Option<Arc<dyn DocumentStore>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The store handle, or the fixed configuration failure.
    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        self.store.as_ref().ok_or(AppError::DatabaseNotConfigured)
    }
}
