//! Host-owned content and user records read by the reaction service

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{ObjectType, UserId};

/// Publication from the host posts table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub id: i64,
    pub post_type: ObjectType,
    pub title: String,
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Host user, only what the tooltip needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub display_name: String,
}

/// Which reactions count towards a ranking
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReactionFilter {
    #[default]
    Any,
    Only(Vec<String>),
}

impl ReactionFilter {
    /// Build a filter from a list where the literal `any` means no filter
    pub fn from_list(reactions: Vec<String>) -> Self {
        if reactions.is_empty() || reactions.iter().any(|r| r == "any") {
            Self::Any
        } else {
            Self::Only(reactions)
        }
    }

    /// Label attached to ranked results
    pub fn label(&self) -> String {
        match self {
            Self::Any => "any".to_string(),
            Self::Only(list) => list.join(","),
        }
    }
}

/// Parameters of a most-reacted ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostReactedQuery {
    pub post_type: ObjectType,
    pub filter: ReactionFilter,
    /// `None` returns every item with at least one reaction
    pub limit: Option<i64>,
}

/// A publication together with its reaction count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactedPublication {
    #[serde(flatten)]
    pub publication: Publication,
    pub reaction_type: String,
    pub reaction_count: i64,
}
