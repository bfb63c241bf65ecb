//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Only the reaction repository writes to a
//! table owned by this service; options and users belong to the host.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::entities::{MostReactedQuery, NewReaction, ReactedPublication, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::{ObjectRef, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the record an identified reactor left on a content item
    async fn find_by_reactor(&self, object: &ObjectRef, reactor: &str) -> RepoResult<Option<Reaction>>;

    /// All reactions on a content item in insertion order
    async fn find_by_object(&self, object: &ObjectRef) -> RepoResult<Vec<Reaction>>;

    /// Count reactions by icon for a content item
    async fn count_by_reaction(&self, object: &ObjectRef) -> RepoResult<Vec<(String, i64)>>;

    /// Insert a reaction
    ///
    /// Returns `false` when an identical identified reactor already holds a
    /// record on the item and nothing was inserted.
    async fn create(&self, reaction: &NewReaction) -> RepoResult<bool>;

    /// Change the icon of an existing reaction
    async fn update_reaction(&self, id: i64, reaction: &str) -> RepoResult<()>;

    /// Remove a reaction
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Rank published items of one type by reaction count
    async fn most_reacted(&self, query: &MostReactedQuery) -> RepoResult<Vec<ReactedPublication>>;
}

// ============================================================================
// User Repository (host users)
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find users by id, silently skipping ids that do not exist
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Option Repository (host key/value configuration)
// ============================================================================

#[async_trait]
pub trait OptionRepository: Send + Sync {
    /// Read the given options; absent keys are missing from the map
    async fn get_many(&self, names: &[&str]) -> RepoResult<HashMap<String, Value>>;

    /// Store values for keys that do not exist yet, leaving existing ones alone
    async fn add_missing(&self, values: &[(&str, Value)]) -> RepoResult<()>;

    /// Overwrite all given options at once
    async fn replace_all(&self, values: &[(&str, Value)]) -> RepoResult<()>;
}
