//! Domain entities - core business objects

mod icon;
mod publication;
mod reaction;

pub use icon::IconSet;
pub use publication::{MostReactedQuery, Publication, ReactedPublication, ReactionFilter, User};
pub use reaction::{
    NewReaction, Reaction, ReactionCount, ReactorNames, Tally, ToggleOutcome, MAX_REACTION_LEN,
};
