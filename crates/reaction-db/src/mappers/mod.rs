//! Entity to model mappers
//!
//! Conversions between domain entities (reaction-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod publication;
mod reaction;
mod user;

pub use publication::reacted_publication;
pub use reaction::{stored_object_type, ReactionInsert};
