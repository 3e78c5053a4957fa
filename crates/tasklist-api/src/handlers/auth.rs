//! Auth handlers: sign-up, sign-in, me.

use axum::Json;
use axum::extract::State;

use tasklist_service::auth::SignUpInput;

use crate::dto::request::{SignInRequest, SignUpRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let payload = state
        .auth_service
        .sign_up(SignUpInput {
            name: req.name,
            email: req.email,
            password: req.password,
            avatar: req.avatar,
        })
        .await?;

    Ok(Json(ApiResponse::ok(payload.into())))
}

/// POST /api/auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignInRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let payload = state
        .auth_service
        .sign_in(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(payload.into())))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.me(user.context())?;
    Ok(Json(ApiResponse::ok(user.into())))
}
