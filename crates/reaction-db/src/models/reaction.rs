//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub obj_type: String,
    pub obj_id: i64,
    pub reactor: String,
    pub reaction: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated reaction count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub reaction: String,
    pub count: i64,
}
