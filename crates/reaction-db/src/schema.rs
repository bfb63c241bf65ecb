//! Table provisioning
//!
//! Creates the `reactions` table and its indexes when they do not exist yet.
//! Safe to run on every startup.

use sqlx::PgPool;
use tracing::{info, instrument};

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS reactions (
        id          BIGSERIAL PRIMARY KEY,
        obj_type    VARCHAR(50)  NOT NULL,
        obj_id      BIGINT       NOT NULL,
        reactor     VARCHAR(120) NOT NULL DEFAULT '',
        reaction    VARCHAR(50)  NOT NULL,
        created_at  TIMESTAMPTZ  NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_reactions_object
        ON reactions (obj_type, obj_id)
    "#,
    // One record per identified reactor; anonymous rows are never deduplicated
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS uq_reactions_reactor
        ON reactions (obj_type, obj_id, reactor)
        WHERE reactor <> ''
    "#,
];

/// Create the reactions table and indexes if absent
#[instrument(skip(pool))]
pub async fn provision(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Reactions table provisioned");
    Ok(())
}
