//! Error handling utilities for repositories

use reaction_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    tracing::error!(error = %e, "Database query failed");
    DomainError::DatabaseError(e.to_string())
}

/// Create a "reaction not found" error
pub fn reaction_not_found(id: i64) -> DomainError {
    DomainError::ReactionNotFound(id)
}
