//! # reaction-api
//!
//! HTTP server built with the Axum framework: the client action endpoint,
//! rendering and ranking endpoints, the admin settings page and static assets.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
