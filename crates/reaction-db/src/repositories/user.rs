//! PostgreSQL implementation of UserRepository (read-only host users)

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reaction_core::entities::User;
use reaction_core::traits::{RepoResult, UserRepository};
use reaction_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, display_name
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}
