//! Reactor identity
//!
//! The `reactor` column holds one of three things: a host user id written as
//! digits, a display name typed in by a guest, or nothing at all.

use std::fmt;

use super::UserId;

/// Maximum stored length of a reactor value, matching the column width
pub const MAX_REACTOR_LEN: usize = 120;

/// Who reacted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reactor {
    /// Authenticated host user
    Member(UserId),
    /// Visitor who supplied a display name
    Guest(String),
    /// Visitor with no identity at all
    Anonymous,
}

impl Reactor {
    /// Interpret a stored reactor value
    pub fn from_stored(value: &str) -> Self {
        if value.is_empty() {
            return Self::Anonymous;
        }
        match UserId::parse(value) {
            Ok(id) => Self::Member(id),
            Err(_) => Self::Guest(value.to_string()),
        }
    }

    /// Value written to the `reactor` column
    pub fn to_stored(&self) -> String {
        match self {
            Self::Member(id) => id.to_string(),
            Self::Guest(name) => name.clone(),
            Self::Anonymous => String::new(),
        }
    }

    /// Whether the reactor can be matched against an existing record
    #[inline]
    pub fn is_identified(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }
}

impl fmt::Display for Reactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(id) => write!(f, "user:{id}"),
            Self::Guest(name) => write!(f, "guest:{name}"),
            Self::Anonymous => f.write_str("anonymous"),
        }
    }
}
