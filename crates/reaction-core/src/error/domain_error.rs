//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ObjectTypeError, SettingsError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reaction not found: {0}")]
    ReactionNotFound(i64),

    #[error("Publication not found: {0}")]
    PublicationNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid content type: {0}")]
    InvalidObjectType(#[from] ObjectTypeError),

    #[error("Reaction is not enabled: {0}")]
    ReactionNotEnabled(String),

    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",
            Self::PublicationNotFound(_) => "UNKNOWN_PUBLICATION",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidObjectType(_) => "INVALID_OBJECT_TYPE",
            Self::ReactionNotEnabled(_) => "REACTION_NOT_ENABLED",
            Self::InvalidSettings(_) => "INVALID_SETTINGS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ReactionNotFound(_) | Self::PublicationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidObjectType(_)
                | Self::ReactionNotEnabled(_)
                | Self::InvalidSettings(_)
        )
    }
}
