//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub assets: AssetsConfig,
    pub host: HostConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Host session token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret shared with the host platform that issues session tokens
    pub secret: String,
    /// Lifetime of admin form nonces, in seconds
    #[serde(default = "default_nonce_expiry")]
    pub nonce_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Static asset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding `js/`, `css/` and `img/`
    #[serde(default = "default_assets_dir")]
    pub dir: String,
    /// Public URL prefix the directory is served under
    #[serde(default = "default_assets_url")]
    pub url: String,
}

impl AssetsConfig {
    /// Directory holding the icon sets
    #[must_use]
    pub fn image_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.dir).join("img")
    }

    /// Public URL of the icon root
    #[must_use]
    pub fn image_url(&self) -> String {
        format!("{}/img", self.url.trim_end_matches('/'))
    }
}

/// Facts about the host platform the service plugs into
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// Public publication types registered by the host
    #[serde(default = "default_post_types")]
    pub post_types: Vec<String>,
    /// Site-specific suffix of the guest name cookie
    #[serde(default)]
    pub cookie_hash: String,
    /// Cookie carrying the host session token
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Public base URL of this service, used to build the action endpoint URL
    #[serde(default)]
    pub public_url: String,
}

impl HostConfig {
    /// Publication types offered in the admin form, without attachments
    #[must_use]
    pub fn public_post_types(&self) -> Vec<String> {
        self.post_types
            .iter()
            .filter(|t| t.as_str() != "attachment")
            .cloned()
            .collect()
    }

    /// URL of the asynchronous action endpoint
    #[must_use]
    pub fn ajax_url(&self) -> String {
        format!("{}/ajax", self.public_url.trim_end_matches('/'))
    }
}

// Default value functions
fn default_app_name() -> String {
    "reaction-service".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_nonce_expiry() -> i64 {
    86400 // 24 hours
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

fn default_assets_url() -> String {
    "/assets".to_string()
}

fn default_post_types() -> Vec<String> {
    vec!["post".to_string(), "page".to_string()]
}

fn default_session_cookie() -> String {
    "host_session".to_string()
}

fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &'static str| -> Result<Option<u32>, ConfigError> {
            lookup(key)
                .map(|v| {
                    v.parse()
                        .map_err(|_| ConfigError::InvalidValue(key, v.clone()))
                })
                .transpose()
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: lookup("API_PORT")
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parsed("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parsed("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            jwt: JwtConfig {
                secret: lookup("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
                nonce_expiry: lookup("NONCE_EXPIRY")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_nonce_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parsed("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parsed("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| parse_list(&s))
                    .unwrap_or_default(),
            },
            assets: AssetsConfig {
                dir: lookup("ASSETS_DIR").unwrap_or_else(default_assets_dir),
                url: lookup("ASSETS_URL").unwrap_or_else(default_assets_url),
            },
            host: HostConfig {
                post_types: lookup("HOST_POST_TYPES")
                    .map(|s| parse_list(&s))
                    .unwrap_or_else(default_post_types),
                cookie_hash: lookup("COOKIE_HASH").unwrap_or_default(),
                session_cookie: lookup("SESSION_COOKIE").unwrap_or_else(default_session_cookie),
                public_url: lookup("PUBLIC_URL").unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
