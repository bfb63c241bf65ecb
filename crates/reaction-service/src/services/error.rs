//! Service layer error types

use reaction_common::AppError;
use reaction_core::DomainError;
use thiserror::Error;

/// Errors raised by the reaction, render and settings services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Token, nonce and configuration failures
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Missing required capability: {capability}")]
    PermissionDenied { capability: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// The context builder was not given this dependency
    #[error("Service context is missing {0}")]
    Incomplete(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn permission_denied(capability: impl Into<String>) -> Self {
        Self::PermissionDenied {
            capability: capability.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status the API answers with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_validation() => 400,
            Self::Domain(_) | Self::Incomplete(_) | Self::Internal(_) => 500,
            Self::App(e) => e.status_code(),
            Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::PermissionDenied { .. } => "MISSING_CAPABILITY",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Incomplete(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::PermissionDenied { .. } => AppError::InsufficientPermissions,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Incomplete(dependency) => {
                AppError::Config(format!("service context is missing {dependency}"))
            }
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
