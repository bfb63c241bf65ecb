//! Session extractor
//!
//! Reads the host session token from the Authorization header or, for
//! browser requests, from the session cookie.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use reaction_common::Claims;
use reaction_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// User of a valid host session
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub claims: Claims,
}

impl AuthUser {
    pub fn new(user_id: UserId, claims: Claims) -> Self {
        Self { user_id, claims }
    }
}

/// Session token from the Bearer header, else from the session cookie
async fn session_token<S>(parts: &mut Parts, state: &S, cookie: &str) -> Option<String>
where
    S: Send + Sync,
{
    if let Ok(TypedHeader(Authorization(bearer))) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
    {
        return Some(bearer.token().to_string());
    }

    CookieJar::from_headers(&parts.headers)
        .get(cookie)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

fn authenticate(app_state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = app_state
        .jwt_service()
        .validate_access_token(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Invalid session token");
            ApiError::InvalidAuthFormat
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in token");
        ApiError::InvalidAuthFormat
    })?;

    Ok(AuthUser::new(user_id, claims))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = session_token(parts, state, app_state.session_cookie())
            .await
            .ok_or(ApiError::MissingAuth)?;

        authenticate(&app_state, &token)
    }
}

/// Session user when there is one
///
/// Visitors without a valid session are treated as guests; a stale cookie
/// must not lock them out of reacting.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.as_ref().map(|u| u.user_id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.0.is_some()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let Some(token) = session_token(parts, state, app_state.session_cookie()).await else {
            return Ok(OptionalAuthUser(None));
        };

        Ok(OptionalAuthUser(authenticate(&app_state, &token).ok()))
    }
}
