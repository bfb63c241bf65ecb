//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in reaction-core.

mod error;
mod option;
mod reaction;
mod user;

pub use option::PgOptionRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
