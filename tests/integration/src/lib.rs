//! Integration test utilities for the reaction service
//!
//! This crate provides helpers for running end-to-end tests against
//! the HTTP server backed by a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
