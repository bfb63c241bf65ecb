//! # reaction-service
//!
//! Application layer: the reaction engine, HTML rendering, the admin settings
//! surface and the icon catalog, plus request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{
    IconCatalog, ReactionService, RenderService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SettingsService,
};
