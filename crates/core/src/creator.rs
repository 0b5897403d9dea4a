//! Creator (profile) model and projection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::doc;
use crate::error::CoreError;

/// A creator profile.
///
/// Write-side model. `handle` is the natural key when present and is stored
/// without a leading `@`. `segments` holds segment slugs; the slugs are not
/// checked against the segment collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Creator {
    /// Display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Primary handle, without the leading `@`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Platforms the creator is active on.
    #[serde(default)]
    pub platforms: Vec<String>,
    #[validate(url(message = "avatar_url must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[validate(url(message = "banner_url must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Segment slugs the creator belongs to. At least one is required.
    #[validate(length(min = 1, message = "at least one segment is required"))]
    pub segments: Vec<String>,
    /// City/country, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[validate(url(message = "website must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Approximate total followers across platforms.
    #[validate(range(min = 0, message = "followers must not be negative"))]
    #[serde(default)]
    pub followers: i64,
    /// Community score, 0 to 5.
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub verified: bool,
}

/// Check a creator against the write-side rules.
pub fn validate_creator(creator: &Creator) -> Result<(), CoreError> {
    creator
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    if let Some(handle) = &creator.handle {
        if handle.starts_with('@') {
            return Err(CoreError::Validation(
                "handle must not start with '@'".into(),
            ));
        }
    }
    Ok(())
}

/// Client-facing shape for the top-creators listing.
///
/// `id` is the store-assigned identifier rendered as a string. Built
/// leniently: numerics default to zero, the verified flag to false, and
/// the segment list to empty.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorSummary {
    pub id: String,
    pub name: String,
    pub handle: Option<String>,
    pub avatar_url: Option<String>,
    pub segments: Vec<String>,
    pub followers: i64,
    pub rating: f64,
    pub verified: bool,
}

impl CreatorSummary {
    pub fn from_document(id: String, data: &Value) -> Self {
        Self {
            id,
            name: doc::str_field(data, "name"),
            handle: doc::opt_str_field(data, "handle"),
            avatar_url: doc::opt_str_field(data, "avatar_url"),
            segments: doc::str_list_field(data, "segments"),
            followers: doc::i64_field(data, "followers"),
            rating: doc::f64_field(data, "rating"),
            verified: doc::bool_field(data, "verified"),
        }
    }
}
