//! # reaction-core
//!
//! Domain layer containing entities, value objects, typed settings and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    IconSet, MostReactedQuery, NewReaction, Publication, ReactedPublication, Reaction,
    ReactionCount, ReactionFilter, ReactorNames, Tally, ToggleOutcome, User, MAX_REACTION_LEN,
};
pub use error::DomainError;
pub use traits::{OptionRepository, ReactionRepository, RepoResult, UserRepository};
pub use value_objects::{
    keys, sanitize_icon_set, ObjectRef, ObjectType, ObjectTypeError, Position, ReactionSettings,
    Reactor, SettingsError, UserId, UserIdParseError, MAX_REACTOR_LEN, MAX_TYPE_LEN,
};
