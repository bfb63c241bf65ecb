//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use reaction_common::{AppConfig, AppError, JwtService};
use reaction_db::{
    create_pool, provision, DatabaseConfig, PgOptionRepository, PgReactionRepository,
    PgUserRepository,
};
use reaction_service::{ServiceContextBuilder, SettingsService};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health checks and static assets stay outside the rate limiter.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?
    .merge(health_routes());

    // Assets published on another origin are not served from here
    let prefix = config.assets.url.trim_end_matches('/');
    let router = if prefix.starts_with('/') {
        router.nest_service(prefix, ServeDir::new(&config.assets.dir))
    } else {
        router
    };

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// Connects to PostgreSQL, provisions the reactions table and loads the
/// stored settings before the first request is served.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    provision(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.nonce_expiry,
    ));

    // Create repositories
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let option_repo = Arc::new(PgOptionRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .reaction_repo(reaction_repo)
        .user_repo(user_repo)
        .option_repo(option_repo)
        .jwt_service(jwt_service)
        .host(config.host.clone())
        .assets(config.assets.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let settings = SettingsService::new(&service_context)
        .load()
        .await
        .map_err(|e| AppError::Config(format!("Failed to load settings: {e}")))?;

    if settings.active.is_empty() {
        warn!("No reactions enabled yet; configure them at /admin/settings");
    }

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}
