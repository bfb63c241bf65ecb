//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests
//! and issuing host session tokens.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reaction_api::{create_app, create_app_state};
use reaction_common::{AppConfig, Capability, JwtService};
use reaction_core::UserId;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{prepare_database, TEST_COOKIE_HASH};

const DEFAULT_TEST_SECRET: &str = "integration-test-secret-key-long-enough";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub jwt: JwtService,
    pub pool: reaction_db::PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server over the shared test database
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.nonce_expiry);
        let pool = prepare_database(&config.database.url).await?;

        // Create app state and application
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            jwt,
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Session token of a host user without special capabilities
    pub fn member_token(&self, user_id: i64) -> String {
        self.jwt
            .issue_access_token(UserId::new(user_id), &[], 3600)
            .expect("Failed to issue token")
    }

    /// Session token of a host administrator
    pub fn admin_token(&self, user_id: i64) -> String {
        self.jwt
            .issue_access_token(UserId::new(user_id), &[Capability::ManageOptions], 3600)
            .expect("Failed to issue token")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with a session token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with a URL-encoded form body
    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).form(form).send().await?)
    }

    /// Make a form POST carrying the session in the host cookie
    pub async fn post_form_cookie<T: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        form: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("Cookie", format!("host_session={token}"))
            .form(form)
            .send()
            .await?)
    }

    /// Make a form POST with a session token
    pub async fn post_form_auth<T: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        form: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .form(form)
            .send()
            .await?)
    }
}

/// Create a test configuration
///
/// Reads the environment, then pins the values the tests rely on.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let assets_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");

    let config = AppConfig::from_lookup(|key| match key {
        "API_PORT" => Some("0".to_string()),
        "JWT_SECRET" => std::env::var(key)
            .ok()
            .or_else(|| Some(DEFAULT_TEST_SECRET.to_string())),
        "ASSETS_DIR" => Some(assets_dir.to_string()),
        "ASSETS_URL" => Some("/assets".to_string()),
        "COOKIE_HASH" => Some(TEST_COOKIE_HASH.to_string()),
        "SESSION_COOKIE" => Some("host_session".to_string()),
        "PUBLIC_URL" => Some("http://127.0.0.1".to_string()),
        "HOST_POST_TYPES" => Some("post,page,attachment".to_string()),
        "RATE_LIMIT_REQUESTS_PER_SECOND" => Some("1".to_string()),
        "RATE_LIMIT_BURST" => Some("10000".to_string()),
        _ => std::env::var(key).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status and return the body text
pub async fn assert_text(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(body)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    assert_text(response, expected_status).await.map(|_| ())
}

/// Value of a hidden input in a rendered page
pub fn hidden_input(html: &str, name: &str) -> Option<String> {
    let marker = format!("name='{name}' value='");
    let start = html.find(&marker)? + marker.len();
    let end = html[start..].find('\'')?;
    Some(html[start..start + end].to_string())
}
