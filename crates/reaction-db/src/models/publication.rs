//! Host publication joined with its reaction count

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row returned by the most-reacted ranking query
#[derive(Debug, Clone, FromRow)]
pub struct ReactedPublicationModel {
    pub id: i64,
    pub post_type: String,
    pub post_title: String,
    pub post_status: String,
    pub post_date: Option<DateTime<Utc>>,
    pub reaction_count: i64,
}
