//! Session extractors: resolve the Authorization header into a request context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use tasklist_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The request context for the current request, possibly anonymous.
///
/// Never rejects because of a missing or invalid token.
#[derive(Debug, Clone)]
pub struct Session(pub RequestContext);

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Non-ASCII header values count as absent.
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let ctx = match state.session_resolver.resolve(header).await? {
            Some(user) => RequestContext::authenticated(user),
            None => RequestContext::anonymous(),
        };
        Ok(Session(ctx))
    }
}

/// An authenticated request context.
///
/// Rejects anonymous requests with `AUTHENTICATION_REQUIRED`. Place it
/// before `Path` and body extractors so identity is checked first.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestContext);

impl CurrentUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Session(ctx) = Session::from_request_parts(parts, state).await?;
        ctx.require_user()?;
        Ok(CurrentUser(ctx))
    }
}
