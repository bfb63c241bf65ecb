//! Reaction read handlers
//!
//! Rendered bars, tallies and the most-reacted ranking.

use axum::{extract::State, response::Html, Json};
use reaction_core::ReactionFilter;
use reaction_service::dto::{MostReactedParams, MostReactedResponse, TallyResponse};
use reaction_service::{ReactionService, RenderService};

use crate::extractors::{ObjectPath, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Wrapped reaction bar for one content item
///
/// GET /api/v1/reactions/{object_type}/{id}
pub async fn get_fragment(
    State(state): State<AppState>,
    ObjectPath(object): ObjectPath,
) -> ApiResult<Html<String>> {
    let html = RenderService::new(state.service_context())
        .render_fragment(&object, true)
        .await?;
    Ok(Html(html))
}

/// Counts and reactor names of one content item
///
/// GET /api/v1/reactions/{object_type}/{id}/tally
pub async fn get_tally(
    State(state): State<AppState>,
    ObjectPath(object): ObjectPath,
) -> ApiResult<Json<TallyResponse>> {
    let service = ReactionService::new(state.service_context());
    let (counts, names) = tokio::try_join!(service.tally(&object), service.reactor_names(&object))?;
    Ok(Json(TallyResponse::new(object, counts, names)))
}

/// Published items ranked by reaction count
///
/// GET /api/v1/most-reacted?post_type=&reactions=&limit=
pub async fn most_reacted(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<MostReactedParams>,
) -> ApiResult<Json<MostReactedResponse>> {
    let reactions = params.reaction_list();
    let reaction_type = ReactionFilter::from_list(reactions.clone()).label();

    let items = ReactionService::new(state.service_context())
        .most_reacted(params.post_type(), reactions, params.limit)
        .await?;

    Ok(Json(MostReactedResponse {
        post_type: params.post_type().to_string(),
        reaction_type,
        items,
    }))
}
