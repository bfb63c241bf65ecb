//! Repository traits (ports)

mod repositories;

pub use repositories::{OptionRepository, ReactionRepository, RepoResult, UserRepository};
