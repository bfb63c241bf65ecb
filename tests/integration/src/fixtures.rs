//! Test fixtures and data generators
//!
//! Creates the host tables the service reads, stores the settings every test
//! expects, and inserts publications and users.

use anyhow::Result;
use reaction_core::traits::OptionRepository;
use reaction_core::value_objects::{ObjectType, Position, ReactionSettings};
use reaction_db::{PgOptionRepository, PgPool};
use serde::Serialize;
use uuid::Uuid;

/// Guest name cookie suffix the server is configured with
pub const TEST_COOKIE_HASH: &str = "testhash";

/// Reactions enabled for every test
pub const ACTIVE: [&str; 3] = ["like", "love", "wow"];

/// Stand-ins for the host tables, created only when missing
const HOST_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS posts (
        id          BIGINT PRIMARY KEY,
        post_type   VARCHAR(50)  NOT NULL,
        post_title  TEXT         NOT NULL DEFAULT '',
        post_status VARCHAR(20)  NOT NULL DEFAULT 'publish',
        post_date   TIMESTAMPTZ
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id           BIGINT PRIMARY KEY,
        display_name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS options (
        option_name  VARCHAR(191) PRIMARY KEY,
        option_value JSONB NOT NULL
    )
    "#,
];

/// Settings shared by all tests
///
/// Tests run concurrently against one options table, so every test that
/// writes settings writes exactly these.
pub fn standard_settings() -> ReactionSettings {
    ReactionSettings {
        types: vec![
            ObjectType::Post,
            ObjectType::Other("page".to_string()),
            ObjectType::Comment,
        ],
        active: ACTIVE.iter().map(|s| (*s).to_string()).collect(),
        post_position: Position::Before,
        comment_position: Position::After,
        icon_set: None,
    }
}

/// Connect, create host tables and store the standard settings
pub async fn prepare_database(url: &str) -> Result<PgPool> {
    let pool = PgPool::connect(url).await?;

    for statement in HOST_TABLES {
        sqlx::query(statement).execute(&pool).await?;
    }

    PgOptionRepository::new(pool.clone())
        .replace_all(&standard_settings().to_options())
        .await?;

    Ok(pool)
}

/// An id no other test run uses
pub fn unique_id() -> i64 {
    (Uuid::new_v4().as_u128() % 1_000_000_000_000) as i64
}

/// A content type tag no other test run uses
pub fn unique_type() -> String {
    format!("it{}", &Uuid::new_v4().simple().to_string()[..12])
}

/// A guest display name no other test run uses
pub fn unique_guest() -> String {
    format!("guest-{}", &Uuid::new_v4().simple().to_string()[..8])
}

pub async fn insert_post(pool: &PgPool, id: i64, post_type: &str, status: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO posts (id, post_type, post_title, post_status, post_date) VALUES ($1, $2, $3, $4, NOW())",
    )
    .bind(id)
    .bind(post_type)
    .bind(format!("Post {id}"))
    .bind(status)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert_user(pool: &PgPool, id: i64, display_name: &str) -> Result<()> {
    sqlx::query("INSERT INTO users (id, display_name) VALUES ($1, $2)")
        .bind(id)
        .bind(display_name)
        .execute(pool)
        .await?;
    Ok(())
}

/// Form the client script posts on a click
#[derive(Debug, Serialize)]
pub struct ReactionClick {
    pub action: &'static str,
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: i64,
    pub reaction: String,
    pub user: String,
}

impl ReactionClick {
    pub fn new(object_type: &str, id: i64, reaction: &str, user: &str) -> Self {
        Self {
            action: "improve_reaction",
            object_type: object_type.to_string(),
            id,
            reaction: reaction.to_string(),
            user: user.to_string(),
        }
    }

    pub fn on_post(id: i64, reaction: &str, user: &str) -> Self {
        Self::new("post", id, reaction, user)
    }
}

/// Admin form fields matching [`standard_settings`]
pub fn standard_settings_form(nonce: &str) -> Vec<(&'static str, String)> {
    let mut form = vec![
        ("types", "post".to_string()),
        ("types", "page".to_string()),
        ("types", "comment".to_string()),
    ];
    for icon in ACTIVE {
        form.push(("reactions", icon.to_string()));
        form.push(("active_order", icon.to_string()));
    }
    form.extend([
        ("post_position", "before".to_string()),
        ("comment_position", "after".to_string()),
        ("image_set", String::new()),
        ("reaction_nonce_field", nonce.to_string()),
    ]);
    form
}
