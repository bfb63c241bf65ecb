//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AjaxReactionRequest, CommentFilterRequest, ContentFilterRequest, MostReactedParams,
    SettingsForm, REACTION_ACTION,
};

// Re-export commonly used response types
pub use responses::{
    HealthChecks, HealthResponse, MostReactedResponse, ReadinessResponse, TallyResponse,
};
