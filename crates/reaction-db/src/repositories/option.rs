//! PostgreSQL implementation of OptionRepository over the host options table

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::instrument;

use reaction_core::traits::{OptionRepository, RepoResult};

use crate::models::OptionModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgOptionRepository {
    pool: PgPool,
}

impl PgOptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OptionRepository for PgOptionRepository {
    #[instrument(skip(self))]
    async fn get_many(&self, names: &[&str]) -> RepoResult<HashMap<String, Value>> {
        let names: Vec<String> = names.iter().map(|n| (*n).to_string()).collect();

        let results = sqlx::query_as::<_, OptionModel>(
            r#"
            SELECT option_name, option_value
            FROM options
            WHERE option_name = ANY($1)
            "#,
        )
        .bind(&names)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (row.option_name, row.option_value))
            .collect())
    }

    #[instrument(skip(self, values))]
    async fn add_missing(&self, values: &[(&str, Value)]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for (name, value) in values {
            sqlx::query(
                r#"
                INSERT INTO options (option_name, option_value)
                VALUES ($1, $2)
                ON CONFLICT (option_name) DO NOTHING
                "#,
            )
            .bind(*name)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, values))]
    async fn replace_all(&self, values: &[(&str, Value)]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for (name, value) in values {
            sqlx::query(
                r#"
                INSERT INTO options (option_name, option_value)
                VALUES ($1, $2)
                ON CONFLICT (option_name) DO UPDATE SET option_value = EXCLUDED.option_value
                "#,
            )
            .bind(*name)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}
