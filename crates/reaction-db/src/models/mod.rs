//! Database models - SQLx-compatible structs for PostgreSQL tables

mod option;
mod publication;
mod reaction;
mod user;

pub use option::OptionModel;
pub use publication::ReactedPublicationModel;
pub use reaction::{ReactionCountModel, ReactionModel};
pub use user::UserModel;
