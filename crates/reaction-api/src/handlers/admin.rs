//! Admin settings page handlers

use axum::{extract::State, response::Html};
use reaction_service::dto::SettingsForm;
use reaction_service::services::settings::SAVED_MESSAGE;
use reaction_service::SettingsService;

use crate::extractors::{AuthUser, ValidatedForm};
use crate::response::{ApiError, HtmlResult};
use crate::state::AppState;

/// GET /admin/settings
pub async fn settings_page(
    State(state): State<AppState>,
    auth: Result<AuthUser, ApiError>,
) -> HtmlResult<Html<String>> {
    let user = SettingsService::require_manage(&auth?.claims)?;

    let page = SettingsService::new(state.service_context())
        .admin_page(user, None)
        .await?;
    Ok(Html(page))
}

/// POST /admin/settings
pub async fn save_settings(
    State(state): State<AppState>,
    auth: Result<AuthUser, ApiError>,
    form: Result<ValidatedForm<SettingsForm>, ApiError>,
) -> HtmlResult<Html<String>> {
    let user = SettingsService::require_manage(&auth?.claims)?;
    let ValidatedForm(form) = form?;

    let service = SettingsService::new(state.service_context());
    service.save(user, &form).await?;

    let page = service.admin_page(user, Some(SAVED_MESSAGE)).await?;
    Ok(Html(page))
}
