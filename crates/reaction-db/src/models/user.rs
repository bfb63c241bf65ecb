//! Host user database model

use sqlx::FromRow;

/// Database model for the columns of the host users table we read
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub display_name: String,
}
