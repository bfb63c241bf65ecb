//! Typed reaction settings
//!
//! The host stores plugin configuration as five loose key/value options. They
//! are read once into [`ReactionSettings`], with explicit defaults for missing
//! keys and a warning for anything malformed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::ObjectType;

/// Host option keys
pub mod keys {
    pub const TYPES: &str = "reaction_types";
    pub const REACTIONS: &str = "reaction_reactions";
    pub const POST_POSITION: &str = "reaction_post_position";
    pub const COMMENT_POSITION: &str = "reaction_comment_position";
    pub const IMAGE_SET: &str = "reaction_image_set";

    /// All keys, in the order they are written
    pub const ALL: [&str; 5] = [TYPES, REACTIONS, POST_POSITION, COMMENT_POSITION, IMAGE_SET];
}

/// Where the reaction bar goes relative to the content it decorates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Before,
    After,
}

impl Position {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "before" => Some(Self::Before),
            "after" => Some(Self::After),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }

    /// Place `html` around `content`
    pub fn wrap(self, html: &str, content: &str) -> String {
        match self {
            Self::Before => format!("{html}{content}"),
            Self::After => format!("{content}{html}"),
        }
    }
}

/// Settings validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid icon set name: {0}")]
    InvalidIconSet(String),

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

/// Plugin configuration, one field per host option
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionSettings {
    /// Content types that get a reaction bar
    pub types: Vec<ObjectType>,
    /// Enabled reaction icons in display order
    pub active: Vec<String>,
    pub post_position: Position,
    pub comment_position: Position,
    /// Selected icon set; `None` is the default set at the asset root
    pub icon_set: Option<String>,
}

impl ReactionSettings {
    /// Build settings from raw option values
    ///
    /// Missing keys take their default. Malformed values are logged and
    /// replaced by the default instead of failing the whole load.
    pub fn from_options(options: &HashMap<String, Value>) -> Self {
        let types = string_list(options.get(keys::TYPES), keys::TYPES)
            .into_iter()
            .filter_map(|tag| match ObjectType::parse(&tag) {
                Ok(t) => Some(t),
                Err(e) => {
                    warn!(tag = %tag, error = %e, "Ignoring invalid content type in settings");
                    None
                }
            })
            .fold(Vec::new(), push_unique);

        let active = string_list(options.get(keys::REACTIONS), keys::REACTIONS)
            .into_iter()
            .filter(|id| !id.is_empty())
            .fold(Vec::new(), push_unique);

        let icon_set = match options.get(keys::IMAGE_SET) {
            Some(Value::String(name)) => sanitize_icon_set(name).unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default icon set");
                None
            }),
            Some(Value::Null) | None => None,
            Some(other) => {
                warn!(value = %other, "Icon set option is not a string");
                None
            }
        };

        Self {
            types,
            active,
            post_position: position(options.get(keys::POST_POSITION), keys::POST_POSITION),
            comment_position: position(options.get(keys::COMMENT_POSITION), keys::COMMENT_POSITION),
            icon_set,
        }
    }

    /// Option values to persist, keyed by host option name
    pub fn to_options(&self) -> Vec<(&'static str, Value)> {
        vec![
            (
                keys::TYPES,
                Value::from(
                    self.types
                        .iter()
                        .map(|t| t.as_str().to_string())
                        .collect::<Vec<_>>(),
                ),
            ),
            (keys::REACTIONS, Value::from(self.active.clone())),
            (keys::POST_POSITION, Value::from(self.post_position.as_str())),
            (
                keys::COMMENT_POSITION,
                Value::from(self.comment_position.as_str()),
            ),
            (
                keys::IMAGE_SET,
                Value::from(self.icon_set.clone().unwrap_or_default()),
            ),
        ]
    }

    /// Whether reactions are shown on this content type
    pub fn is_enabled(&self, object_type: &ObjectType) -> bool {
        self.types.contains(object_type)
    }

    /// Whether any publication (non-comment) type is enabled
    pub fn has_publication_types(&self) -> bool {
        self.types.iter().any(ObjectType::is_publication)
    }

    pub fn comments_enabled(&self) -> bool {
        self.is_enabled(&ObjectType::Comment)
    }

    /// Position of the reaction bar for a content type
    pub fn position_for(&self, object_type: &ObjectType) -> Position {
        match object_type {
            ObjectType::Comment => self.comment_position,
            _ => self.post_position,
        }
    }

    /// Whether an icon id is in the enabled list
    pub fn is_active(&self, reaction: &str) -> bool {
        self.active.iter().any(|id| id == reaction)
    }
}

/// Normalize an icon set name
///
/// Trailing slashes are dropped and an empty name selects the default set.
/// Names that could escape the asset root are rejected.
pub fn sanitize_icon_set(name: &str) -> Result<Option<String>, SettingsError> {
    let name = name.trim().trim_end_matches('/');
    if name.is_empty() {
        return Ok(None);
    }
    if name.starts_with('.') || name.contains(['/', '\\']) || name.contains("..") {
        return Err(SettingsError::InvalidIconSet(name.to_string()));
    }
    Ok(Some(name.to_string()))
}

fn push_unique<T: PartialEq>(mut acc: Vec<T>, item: T) -> Vec<T> {
    if !acc.contains(&item) {
        acc.push(item);
    }
    acc
}

fn string_list(value: Option<&Value>, key: &str) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => {
                    warn!(key, value = %other, "Ignoring non-string list entry");
                    None
                }
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            warn!(key, value = %other, "Expected a list option");
            Vec::new()
        }
    }
}

fn position(value: Option<&Value>, key: &str) -> Position {
    match value {
        Some(Value::String(s)) => Position::parse(s).unwrap_or_else(|| {
            warn!(key, value = %s, "Unknown position, using default");
            Position::default()
        }),
        Some(Value::Null) | None => Position::default(),
        Some(other) => {
            warn!(key, value = %other, "Position option is not a string");
            Position::default()
        }
    }
}
