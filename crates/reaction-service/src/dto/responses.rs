//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

use reaction_core::entities::{ReactedPublication, ReactorNames, Tally};
use reaction_core::value_objects::ObjectRef;

// ============================================================================
// Reaction Responses
// ============================================================================

/// Counts and reactor names of one content item
#[derive(Debug, Clone, Serialize)]
pub struct TallyResponse {
    pub object: ObjectRef,
    pub total: i64,
    pub counts: Tally,
    pub names: Vec<ReactorNames>,
}

impl TallyResponse {
    pub fn new(object: ObjectRef, counts: Tally, names: Vec<ReactorNames>) -> Self {
        Self {
            object,
            total: counts.total(),
            counts,
            names,
        }
    }
}

/// Ranked publications
#[derive(Debug, Clone, Serialize)]
pub struct MostReactedResponse {
    pub post_type: String,
    pub reaction_type: String,
    pub items: Vec<ReactedPublication>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub icons: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, icons_loaded: bool) -> Self {
        Self {
            // Icons never affect readiness
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                icons: if icons_loaded { "loaded" } else { "empty" }.to_string(),
            },
        }
    }
}
