//! PostgreSQL-backed document store.
//!
//! All documents live in a single `documents` table (`id`, `collection`,
//! `data JSONB`). Field names interpolated into the SQL below are always
//! crate-internal constants, never request input; request values are bound.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::store::{Document, DocumentQuery, DocumentStore, StoreError};
use crate::DbPool;

/// Document store handle over a connection pool. Cheap to clone.
#[derive(Clone)]
pub struct PgDocStore {
    pool: DbPool,
}

impl PgDocStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for migrations and health checks.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocStore {
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let docs = sqlx::query_as::<_, Document>(
            "SELECT id, data FROM documents WHERE collection = $1",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;
        Ok(docs)
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        let query = format!(
            "SELECT id, data FROM documents \
             WHERE collection = $1 AND data->>'{field}' = $2 \
             LIMIT 1"
        );
        let doc = sqlx::query_as::<_, Document>(&query)
            .bind(collection)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc)
    }

    async fn insert(&self, collection: &str, data: Value) -> Result<Uuid, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO documents (collection, data) VALUES ($1, $2) RETURNING id",
        )
        .bind(collection)
        .bind(data)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, StoreError> {
        let mut sql = String::from("SELECT id, data FROM documents WHERE collection = $1");
        let mut bind_index = 1;

        if let Some((field, _)) = &query.array_contains {
            bind_index += 1;
            sql.push_str(&format!(" AND jsonb_exists(data->'{field}', ${bind_index})"));
        }
        if let Some(field) = &query.sort_desc_by {
            // Missing fields sort as zero, matching the in-memory backend.
            sql.push_str(&format!(
                " ORDER BY COALESCE((data->>'{field}')::numeric, 0) DESC"
            ));
        }
        if query.limit.is_some() {
            bind_index += 1;
            sql.push_str(&format!(" LIMIT ${bind_index}"));
        }

        let mut stmt = sqlx::query_as::<_, Document>(&sql).bind(collection);
        if let Some((_, value)) = &query.array_contains {
            stmt = stmt.bind(value.as_str());
        }
        if let Some(limit) = query.limit {
            stmt = stmt.bind(limit.max(0));
        }

        Ok(stmt.fetch_all(&self.pool).await?)
    }
}
