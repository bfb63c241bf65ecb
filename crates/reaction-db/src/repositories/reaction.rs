//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reaction_core::entities::{MostReactedQuery, NewReaction, ReactedPublication, Reaction, ReactionFilter};
use reaction_core::traits::{ReactionRepository, RepoResult};
use reaction_core::value_objects::ObjectRef;

use crate::mappers::{reacted_publication, ReactionInsert};
use crate::models::{ReactedPublicationModel, ReactionCountModel, ReactionModel};

use super::error::{map_db_error, reaction_not_found};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_reactor(&self, object: &ObjectRef, reactor: &str) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, obj_type, obj_id, reactor, reaction, created_at
            FROM reactions
            WHERE obj_type = $1 AND obj_id = $2 AND reactor = $3
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(object.object_type.as_str())
        .bind(object.id)
        .bind(reactor)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_object(&self, object: &ObjectRef) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, obj_type, obj_id, reactor, reaction, created_at
            FROM reactions
            WHERE obj_type = $1 AND obj_id = $2
            ORDER BY id
            "#,
        )
        .bind(object.object_type.as_str())
        .bind(object.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_reaction(&self, object: &ObjectRef) -> RepoResult<Vec<(String, i64)>> {
        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT reaction, COUNT(*) AS count
            FROM reactions
            WHERE obj_type = $1 AND obj_id = $2
            GROUP BY reaction
            "#,
        )
        .bind(object.object_type.as_str())
        .bind(object.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(|r| (r.reaction, r.count)).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &NewReaction) -> RepoResult<bool> {
        let insert = ReactionInsert::new(reaction);

        let result = sqlx::query(
            r#"
            INSERT INTO reactions (obj_type, obj_id, reactor, reaction)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (obj_type, obj_id, reactor) WHERE reactor <> '' DO NOTHING
            "#,
        )
        .bind(insert.obj_type)
        .bind(insert.obj_id)
        .bind(&insert.reactor)
        .bind(insert.reaction)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn update_reaction(&self, id: i64, reaction: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE reactions SET reaction = $2 WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(reaction)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reaction_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn most_reacted(&self, query: &MostReactedQuery) -> RepoResult<Vec<ReactedPublication>> {
        let reactions: Option<Vec<String>> = match &query.filter {
            ReactionFilter::Any => None,
            ReactionFilter::Only(list) => Some(list.clone()),
        };

        // A NULL array matches every reaction and a NULL limit returns all rows
        let results = sqlx::query_as::<_, ReactedPublicationModel>(
            r#"
            SELECT p.id, p.post_type, p.post_title, p.post_status, p.post_date,
                   COUNT(r.id) AS reaction_count
            FROM posts p
            JOIN reactions r ON r.obj_id = p.id AND r.obj_type = p.post_type
            WHERE p.post_type = $1
              AND p.post_status = 'publish'
              AND ($2::text[] IS NULL OR r.reaction = ANY($2::text[]))
            GROUP BY p.id, p.post_type, p.post_title, p.post_status, p.post_date
            ORDER BY reaction_count DESC, p.id ASC
            LIMIT $3
            "#,
        )
        .bind(query.post_type.as_str())
        .bind(reactions)
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let label = query.filter.label();
        Ok(results
            .into_iter()
            .map(|model| reacted_publication(model, &label))
            .collect())
    }
}
