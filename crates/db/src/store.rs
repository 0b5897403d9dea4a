//! The document store abstraction.
//!
//! Records are schema-flexible JSON documents grouped into named
//! collections and identified by a store-assigned UUID. Handlers depend on
//! the [`DocumentStore`] trait object, so tests can swap the PostgreSQL
//! backend for [`crate::memory::MemStore`].

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Collection holding segment documents.
pub const SEGMENT_COLLECTION: &str = "segment";

/// Collection holding creator documents.
pub const CREATOR_COLLECTION: &str = "creator";

/// A stored record: opaque id plus raw body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Document {
    pub id: Uuid,
    pub data: Value,
}

/// Field-match query over one collection.
///
/// Covers the one targeted read this system performs (creators filtered by
/// segment, sorted by follower count, truncated): filter, sort, and limit
/// are each optional and compose.
#[derive(Debug, Clone, Default)]
pub struct DocumentQuery {
    /// Keep only documents whose string-array `field` contains `value`.
    pub array_contains: Option<(String, String)>,
    /// Sort numerically on this field, highest first. Documents missing the
    /// field sort as zero. Ties keep store order.
    pub sort_desc_by: Option<String>,
    /// Truncate the result set. Zero yields an empty set.
    pub limit: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read/write operations every store backend provides.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Names of the collections that currently hold documents. Diagnostics
    /// only.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    /// Every document in a collection, in store-default order.
    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// First document whose string `field` equals `value`, if any.
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert a document and return its store-assigned id.
    async fn insert(&self, collection: &str, data: Value) -> Result<Uuid, StoreError>;

    /// Filtered/sorted/limited read over a collection.
    async fn query(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, StoreError>;
}
