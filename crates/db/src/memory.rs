//! In-memory document store.
//!
//! A test double for [`crate::postgres::PgDocStore`] with the same
//! observable semantics: store-assigned UUIDs, insertion order as the
//! default read order, numeric sorting that treats missing fields as zero
//! and keeps ties stable.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{Document, DocumentQuery, DocumentStore, StoreError};

#[derive(Default)]
pub struct MemStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn numeric_field(data: &Value, field: &str) -> f64 {
    data.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}

fn array_contains(data: &Value, field: &str, value: &str) -> bool {
    data.get(field)
        .and_then(Value::as_array)
        .is_some_and(|items| items.iter().any(|item| item.as_str() == Some(value)))
}

#[async_trait]
impl DocumentStore for MemStore {
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|doc| doc.data.get(field).and_then(Value::as_str) == Some(value))
                .cloned()
        }))
    }

    async fn insert(&self, collection: &str, data: Value) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document { id, data });
        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        query: DocumentQuery,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let mut docs = collections.get(collection).cloned().unwrap_or_default();

        if let Some((field, value)) = &query.array_contains {
            docs.retain(|doc| array_contains(&doc.data, field, value));
        }
        if let Some(field) = &query.sort_desc_by {
            // Stable sort: equal keys keep insertion order.
            docs.sort_by(|a, b| {
                numeric_field(&b.data, field).total_cmp(&numeric_field(&a.data, field))
            });
        }
        if let Some(limit) = query.limit {
            docs.truncate(limit.max(0) as usize);
        }
        Ok(docs)
    }
}
