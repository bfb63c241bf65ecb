//! Content decoration handlers
//!
//! The host page renderer passes publication content and comment text
//! through these before printing them.

use axum::{extract::State, response::Html};
use reaction_service::dto::{CommentFilterRequest, ContentFilterRequest};
use reaction_service::RenderService;

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /api/v1/filters/content
pub async fn filter_content(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContentFilterRequest>,
) -> ApiResult<Html<String>> {
    let html = RenderService::new(state.service_context())
        .filter_publication(&request.post_type, request.post_id, &request.content)
        .await?;
    Ok(Html(html))
}

/// POST /api/v1/filters/comment
pub async fn filter_comment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CommentFilterRequest>,
) -> ApiResult<Html<String>> {
    let html = RenderService::new(state.service_context())
        .filter_comment(request.comment_id, &request.text)
        .await?;
    Ok(Html(html))
}

/// Script and style tags for a page showing reaction bars
///
/// GET /api/v1/bootstrap
pub async fn bootstrap(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
) -> ApiResult<Html<String>> {
    let html = RenderService::new(state.service_context()).bootstrap_script(auth.is_logged_in())?;
    Ok(Html(html))
}
