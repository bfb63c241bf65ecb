//! Content item addressing
//!
//! Reactions attach to host content items. A content item is addressed by its
//! type tag and numeric id. Comments live in their own host table, every other
//! type is a publication in the host posts table.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum length of a type tag, matching the `obj_type` column
pub const MAX_TYPE_LEN: usize = 50;

/// Kind of content item a reaction belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    /// Regular blog post
    Post,
    /// Comment on any publication
    Comment,
    /// Any other host publication type (page, product, ...)
    Other(String),
}

impl ObjectType {
    pub const POST: &'static str = "post";
    pub const COMMENT: &'static str = "comment";

    /// Parse a type tag
    pub fn parse(tag: &str) -> Result<Self, ObjectTypeError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ObjectTypeError::Empty);
        }
        if tag.len() > MAX_TYPE_LEN {
            return Err(ObjectTypeError::TooLong { max: MAX_TYPE_LEN });
        }
        Ok(match tag {
            Self::POST => Self::Post,
            Self::COMMENT => Self::Comment,
            other => Self::Other(other.to_string()),
        })
    }

    /// Stored tag for this type
    pub fn as_str(&self) -> &str {
        match self {
            Self::Post => Self::POST,
            Self::Comment => Self::COMMENT,
            Self::Other(name) => name,
        }
    }

    /// Whether this type is a publication (lives in the host posts table)
    #[inline]
    pub fn is_publication(&self) -> bool {
        !matches!(self, Self::Comment)
    }
}

/// Error when parsing a type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ObjectTypeError {
    #[error("content type is empty")]
    Empty,

    #[error("content type too long: max {max} characters")]
    TooLong { max: usize },
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ObjectType {
    type Err = ObjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::parse(s)
    }
}

impl Serialize for ObjectType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ObjectType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        ObjectType::parse(&tag).map_err(serde::de::Error::custom)
    }
}

/// A single reactable content item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub id: i64,
}

impl ObjectRef {
    pub fn new(object_type: ObjectType, id: i64) -> Self {
        Self { object_type, id }
    }

    pub fn post(id: i64) -> Self {
        Self::new(ObjectType::Post, id)
    }

    pub fn comment(id: i64) -> Self {
        Self::new(ObjectType::Comment, id)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.object_type, self.id)
    }
}
