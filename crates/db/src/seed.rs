//! Idempotent seeding of the built-in demo catalog.
//!
//! Re-running converges: each catalog record is inserted at most once,
//! keyed on its natural key (segment slug, creator handle), and existing
//! records are never overwritten. The check-then-insert pairs are not
//! atomic, so concurrent seed invocations can race each other into
//! duplicates; single-caller use is assumed.

use serde::Serialize;

use creatorhub_core::catalog;
use creatorhub_core::creator::validate_creator;
use creatorhub_core::error::CoreError;
use creatorhub_core::segment::validate_segment;

use crate::store::{DocumentStore, StoreError, CREATOR_COLLECTION, SEGMENT_COLLECTION};

/// Counts of records inserted by one seeding run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SeedOutcome {
    pub segments_created: u64,
    pub creators_created: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Insert whichever catalog records are not already present.
///
/// Segments first, then creators, each in catalog order. Every candidate
/// passes write-side validation before it is checked against the store.
pub async fn seed_catalog(store: &dyn DocumentStore) -> Result<SeedOutcome, SeedError> {
    let mut outcome = SeedOutcome::default();

    for segment in catalog::segment_catalog() {
        validate_segment(&segment)?;
        let existing = store
            .find_by_field(SEGMENT_COLLECTION, "slug", &segment.slug)
            .await?;
        if existing.is_none() {
            let data = serde_json::to_value(&segment).map_err(StoreError::Encode)?;
            store.insert(SEGMENT_COLLECTION, data).await?;
            outcome.segments_created += 1;
        }
    }

    for creator in catalog::creator_catalog() {
        validate_creator(&creator)?;
        let existing = match creator.handle.as_deref() {
            Some(handle) => {
                store
                    .find_by_field(CREATOR_COLLECTION, "handle", handle)
                    .await?
            }
            // No natural key to check against, insert unconditionally.
            None => None,
        };
        if existing.is_none() {
            let data = serde_json::to_value(&creator).map_err(StoreError::Encode)?;
            store.insert(CREATOR_COLLECTION, data).await?;
            outcome.creators_created += 1;
        }
    }

    tracing::info!(
        segments_created = outcome.segments_created,
        creators_created = outcome.creators_created,
        "Seeded demo catalog"
    );
    Ok(outcome)
}
