//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request.

pub mod admin_page;
pub mod context;
pub mod error;
pub mod html;
pub mod icons;
pub mod reaction;
pub mod render;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use icons::IconCatalog;
pub use reaction::ReactionService;
pub use render::RenderService;
pub use settings::SettingsService;
