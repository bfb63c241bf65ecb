//! Reaction entity - one visitor's reaction on one content item

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{ObjectRef, Reactor};

/// Maximum length of a reaction icon id, matching the `reaction` column
pub const MAX_REACTION_LEN: usize = 50;

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub object: ObjectRef,
    pub reactor: Reactor,
    pub reaction: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Check if reaction uses a specific icon
    #[inline]
    pub fn is_reaction(&self, reaction: &str) -> bool {
        self.reaction == reaction
    }
}

/// Reaction about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub object: ObjectRef,
    pub reactor: Reactor,
    pub reaction: String,
}

impl NewReaction {
    pub fn new(object: ObjectRef, reactor: Reactor, reaction: impl Into<String>) -> Self {
        Self {
            object,
            reactor,
            reaction: reaction.into(),
        }
    }
}

/// What a toggle did to the stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// No record existed, one was inserted
    Added,
    /// The existing record now carries a different reaction
    Switched { from: String },
    /// The same reaction was repeated, the record was deleted
    Removed,
}

/// Count of one reaction icon on a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCount {
    pub reaction: String,
    pub count: i64,
}

impl ReactionCount {
    pub fn new(reaction: impl Into<String>, count: i64) -> Self {
        Self {
            reaction: reaction.into(),
            count,
        }
    }
}

/// Per-icon counts in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally(pub Vec<ReactionCount>);

impl Tally {
    /// Count for one icon, 0 when the icon is not part of the tally
    pub fn count(&self, reaction: &str) -> i64 {
        self.0
            .iter()
            .find(|c| c.reaction == reaction)
            .map_or(0, |c| c.count)
    }

    pub fn total(&self) -> i64 {
        self.0.iter().map(|c| c.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReactionCount> {
        self.0.iter()
    }
}

/// Display names of everyone who reacted with one icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactorNames {
    pub reaction: String,
    pub names: Vec<String>,
}
