//! Client action endpoint
//!
//! The browser script posts every click here and swaps the returned markup
//! into the reaction bar.

use axum::{extract::State, response::Html};
use reaction_service::dto::AjaxReactionRequest;
use reaction_service::{ReactionService, RenderService};

use crate::extractors::{OptionalAuthUser, ValidatedForm};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle the clicked reaction and return the refreshed links
///
/// POST /ajax
pub async fn improve_reaction(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedForm(request): ValidatedForm<AjaxReactionRequest>,
) -> ApiResult<Html<String>> {
    let ctx = state.service_context();

    let (object, _) = ReactionService::new(ctx)
        .react(&request, auth.user_id())
        .await?;

    let html = RenderService::new(ctx).render_fragment(&object, false).await?;
    Ok(Html(html))
}
