//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use reaction_core::value_objects::MAX_TYPE_LEN;
use reaction_core::MAX_REACTION_LEN;

/// Action name the client script posts with every click
pub const REACTION_ACTION: &str = "improve_reaction";

// ============================================================================
// Reaction Requests
// ============================================================================

/// Form posted by the client script when a reaction icon is clicked
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AjaxReactionRequest {
    #[validate(custom(function = "validate_action"))]
    pub action: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "Content type must be 1-50 characters"))]
    pub object_type: String,

    pub id: i64,

    #[validate(length(min = 1, max = 50, message = "Reaction must be 1-50 characters"))]
    pub reaction: String,

    /// Display name typed in by a guest; overrides the session user when set
    #[serde(default)]
    #[validate(length(max = 120, message = "Name must be at most 120 characters"))]
    pub user: String,
}

fn validate_action(action: &str) -> Result<(), ValidationError> {
    if action == REACTION_ACTION {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_action"))
    }
}

// ============================================================================
// Content Filter Requests
// ============================================================================

/// Publication content to decorate with the reaction bar
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContentFilterRequest {
    pub post_id: i64,

    #[validate(length(min = 1, max = 50, message = "Post type must be 1-50 characters"))]
    pub post_type: String,

    #[serde(default)]
    pub content: String,
}

/// Comment text to decorate with the reaction bar
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentFilterRequest {
    pub comment_id: i64,

    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query string of the most-reacted ranking
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct MostReactedParams {
    #[validate(length(min = 1, max = 50, message = "Post type must be 1-50 characters"))]
    pub post_type: Option<String>,

    /// Comma separated reaction ids, or `any`
    pub reactions: Option<String>,

    /// Non-positive values mean no limit
    pub limit: Option<i64>,
}

impl MostReactedParams {
    pub fn post_type(&self) -> &str {
        self.post_type.as_deref().unwrap_or("post")
    }

    pub fn reaction_list(&self) -> Vec<String> {
        self.reactions
            .as_deref()
            .unwrap_or("any")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Admin settings form
///
/// Checkbox groups post one value per checked box under the same key; an
/// unchecked group is absent from the body entirely.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct SettingsForm {
    #[serde(default)]
    #[validate(length(max = 100), custom(function = "validate_type_tags"))]
    pub types: Vec<String>,

    /// Icon checkboxes; only mirrored into `active_order` on the client
    #[serde(default)]
    pub reactions: Vec<String>,

    /// Enabled icons in display order
    #[serde(default)]
    #[validate(length(max = 100), custom(function = "validate_reaction_ids"))]
    pub active_order: Vec<String>,

    #[serde(default)]
    pub post_position: String,

    #[serde(default)]
    pub comment_position: String,

    #[serde(default)]
    pub image_set: String,

    #[serde(default)]
    pub reaction_nonce_field: String,
}

fn validate_type_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.iter().all(|t| !t.is_empty() && t.len() <= MAX_TYPE_LEN) {
        Ok(())
    } else {
        Err(ValidationError::new("type_length"))
    }
}

fn validate_reaction_ids(ids: &[String]) -> Result<(), ValidationError> {
    if ids.iter().all(|r| !r.is_empty() && r.len() <= MAX_REACTION_LEN) {
        Ok(())
    } else {
        Err(ValidationError::new("reaction_length"))
    }
}
