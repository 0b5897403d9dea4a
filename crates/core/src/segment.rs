//! Segment (content category) model and projection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::doc;
use crate::error::CoreError;

/// A content category that creators are filed under.
///
/// This is the write-side model: every field rule here is enforced before a
/// segment document reaches the store. `slug` is the natural key; uniqueness
/// is the seed procedure's responsibility, not the store's.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Segment {
    /// Display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// URL-safe identifier, unique across segments.
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hero/cover image.
    #[validate(url(message = "cover_image must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// UI accent color, stored verbatim (format unvalidated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Check a segment against the write-side rules.
pub fn validate_segment(segment: &Segment) -> Result<(), CoreError> {
    segment
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))
}

/// Client-facing shape for segment listings.
///
/// Built leniently from a raw document: absent fields fall back to defaults
/// instead of failing the whole listing.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentSummary {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl SegmentSummary {
    pub fn from_document(data: &Value) -> Self {
        Self {
            name: doc::str_field(data, "name"),
            slug: doc::str_field(data, "slug"),
            description: doc::opt_str_field(data, "description"),
            color: doc::opt_str_field(data, "color"),
        }
    }
}
