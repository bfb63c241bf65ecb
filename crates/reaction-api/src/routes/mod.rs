//! Route definitions
//!
//! The client action endpoint, the JSON/HTML API under /api/v1 and the admin
//! settings page.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, ajax, filters, health, reactions};
use crate::state::AppState;

/// Create the main router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/ajax", post(ajax::improve_reaction))
        .route(
            "/admin/settings",
            get(admin::settings_page).post(admin::save_settings),
        )
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(reaction_routes())
        .merge(filter_routes())
}

/// Reaction read routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/reactions/:object_type/:id", get(reactions::get_fragment))
        .route("/reactions/:object_type/:id/tally", get(reactions::get_tally))
        .route("/most-reacted", get(reactions::most_reacted))
}

/// Content decoration routes
fn filter_routes() -> Router<AppState> {
    Router::new()
        .route("/filters/content", post(filters::filter_content))
        .route("/filters/comment", post(filters::filter_comment))
        .route("/bootstrap", get(filters::bootstrap))
}
