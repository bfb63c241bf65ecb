//! Settings service
//!
//! Loads the stored options into the shared snapshot, serves the admin page
//! and applies submitted settings forms.

use std::sync::Arc;

use reaction_common::auth::{Capability, Claims};
use reaction_core::value_objects::{
    keys, sanitize_icon_set, ObjectType, Position, ReactionSettings, SettingsError, UserId,
};
use reaction_core::DomainError;
use tracing::{info, instrument};

use crate::dto::SettingsForm;

use super::admin_page::{self, AdminPage};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Action the settings form nonce is bound to
pub const SETTINGS_ACTION: &str = "reaction_settings";

/// Notice shown after a successful save
pub const SAVED_MESSAGE: &str = "Configuration successfully saved!";

/// Settings service
pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Read the stored options and publish them as the current snapshot
    ///
    /// Options that do not exist yet are created with their defaults.
    #[instrument(skip(self))]
    pub async fn load(&self) -> ServiceResult<Arc<ReactionSettings>> {
        let repo = self.ctx.option_repo();
        let stored = repo.get_many(&keys::ALL).await?;

        let missing: Vec<_> = ReactionSettings::default()
            .to_options()
            .into_iter()
            .filter(|(name, _)| !stored.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            info!(count = missing.len(), "Creating missing reaction options");
            repo.add_missing(&missing).await?;
        }

        let settings = ReactionSettings::from_options(&stored);
        let icon_set = self.ctx.icons().load_set(settings.icon_set.as_deref()).await;

        info!(
            types = settings.types.len(),
            active = settings.active.len(),
            icons = icon_set.icons.len(),
            "Reaction settings loaded"
        );

        self.ctx.replace_snapshot(settings, icon_set);
        Ok(self.ctx.settings())
    }

    pub fn current(&self) -> Arc<ReactionSettings> {
        self.ctx.settings()
    }

    /// Ensure the caller may change settings and return their id
    pub fn require_manage(claims: &Claims) -> ServiceResult<UserId> {
        if !claims.has_capability(Capability::ManageOptions) {
            return Err(ServiceError::permission_denied(
                Capability::ManageOptions.as_str(),
            ));
        }
        Ok(claims.user_id()?)
    }

    /// Content types offered on the settings page
    pub fn public_types(&self) -> Vec<String> {
        let mut types = self.ctx.host().public_post_types();
        types.push(ObjectType::COMMENT.to_string());
        types
    }

    /// Settings page with a fresh nonce for `user`
    #[instrument(skip(self))]
    pub async fn admin_page(&self, user: UserId, message: Option<&str>) -> ServiceResult<String> {
        let nonce = self.ctx.jwt_service().issue_nonce(user, SETTINGS_ACTION)?;
        let icon_sets = self.ctx.icons().list_sets().await;
        let snapshot = self.ctx.snapshot();
        let public_types = self.public_types();

        Ok(admin_page::render(&AdminPage {
            settings: &snapshot.settings,
            public_types: &public_types,
            icon_sets: &icon_sets,
            icon_set: &snapshot.icon_set,
            icons: self.ctx.icons(),
            nonce: &nonce,
            message,
            form_action: "/admin/settings",
            assets_url: self.ctx.assets().url.trim_end_matches('/'),
        }))
    }

    /// Apply a submitted settings form
    ///
    /// The nonce is checked before anything is written. The stored enabled
    /// list comes from the ordered inputs, not the icon checkboxes.
    #[instrument(skip(self, form))]
    pub async fn save(
        &self,
        user: UserId,
        form: &SettingsForm,
    ) -> ServiceResult<Arc<ReactionSettings>> {
        self.ctx
            .jwt_service()
            .verify_nonce(&form.reaction_nonce_field, user, SETTINGS_ACTION)?;

        let mut types = Vec::with_capacity(form.types.len());
        for tag in &form.types {
            let object_type = ObjectType::parse(tag).map_err(DomainError::from)?;
            if !types.contains(&object_type) {
                types.push(object_type);
            }
        }

        let mut active: Vec<String> = Vec::with_capacity(form.active_order.len());
        for id in &form.active_order {
            if !id.is_empty() && !active.contains(id) {
                active.push(id.clone());
            }
        }

        let icon_set = sanitize_icon_set(&form.image_set).map_err(DomainError::from)?;
        if let Some(name) = &icon_set {
            if !self.ctx.icons().list_sets().await.contains(name) {
                return Err(
                    DomainError::from(SettingsError::InvalidIconSet(name.clone())).into(),
                );
            }
        }

        let settings = ReactionSettings {
            types,
            active,
            post_position: parse_position(&form.post_position)?,
            comment_position: parse_position(&form.comment_position)?,
            icon_set,
        };

        self.ctx
            .option_repo()
            .replace_all(&settings.to_options())
            .await?;

        info!(user = %user, "Reaction settings saved");

        self.load().await
    }
}

/// An omitted position keeps the default
fn parse_position(value: &str) -> ServiceResult<Position> {
    if value.is_empty() {
        return Ok(Position::default());
    }
    Position::parse(value).ok_or_else(|| {
        DomainError::from(SettingsError::InvalidPosition(value.to_string())).into()
    })
}
