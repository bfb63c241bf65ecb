//! # reaction-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Idempotent provisioning of the `reactions` table
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The `posts`, `users` and `options` tables belong to the host platform and
//! are only read (options are also written) by this crate, never created.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reaction_db::{create_pool, provision, DatabaseConfig, PgReactionRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     provision(&pool).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgOptionRepository, PgReactionRepository, PgUserRepository};
pub use schema::provision;
