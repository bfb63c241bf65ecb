//! Host platform user identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Numeric user id as issued by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    ///
    /// Only plain ASCII digits are accepted, so "+7" or " 7" are not user ids.
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserIdParseError::InvalidFormat);
        }
        s.parse::<i64>()
            .map(UserId)
            .map_err(|_| UserIdParseError::OutOfRange)
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id format")]
    InvalidFormat,

    #[error("user id out of range")]
    OutOfRange,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

// Serialize as string, the same way the host stores reactor ids
impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Num(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Str(s) => UserId::parse(&s).map_err(serde::de::Error::custom),
            Raw::Num(n) => Ok(UserId(n)),
        }
    }
}
