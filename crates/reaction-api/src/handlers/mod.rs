//! Route handlers
//!
//! All HTTP request handlers organized by surface.

pub mod admin;
pub mod ajax;
pub mod filters;
pub mod health;
pub mod reactions;
