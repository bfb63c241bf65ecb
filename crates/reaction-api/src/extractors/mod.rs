//! Axum extractors for request handling
//!
//! Custom extractors for the host session, validated bodies and queries, and
//! content item paths.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::ObjectPath;
pub use validated::{ValidatedForm, ValidatedJson, ValidatedQuery};
