//! Persistence for the creatorhub backend.
//!
//! A small document store over PostgreSQL: JSON documents in named
//! collections, addressed through the [`store::DocumentStore`] trait. The
//! [`memory::MemStore`] backend provides the same semantics without a
//! database and backs the test suites.

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod postgres;
pub mod seed;
pub mod store;

pub use postgres::PgDocStore;
pub use store::{
    Document, DocumentQuery, DocumentStore, StoreError, CREATOR_COLLECTION, SEGMENT_COLLECTION,
};

pub type DbPool = sqlx::PgPool;

/// Build the document store from the two environment-supplied parts.
///
/// Returns `Ok(None)` when either part is missing: the caller treats that
/// as "database not configured" rather than an error. The pool is lazy, so
/// an unreachable server surfaces on first use, not here.
pub fn connect(
    server_url: Option<&str>,
    database_name: Option<&str>,
) -> Result<Option<PgDocStore>, sqlx::Error> {
    let (url, name) = match (server_url, database_name) {
        (Some(url), Some(name)) => (url, name),
        _ => return Ok(None),
    };
    let dsn = format!("{}/{}", url.trim_end_matches('/'), name);
    let pool = PgPoolOptions::new().max_connections(20).connect_lazy(&dsn)?;
    Ok(Some(PgDocStore::new(pool)))
}

/// Apply pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Round-trip a trivial query to confirm the connection works.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
