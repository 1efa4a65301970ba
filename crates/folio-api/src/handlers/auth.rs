//! Auth handlers: login and logout.

use axum::Json;
use axum::extract::State;

use folio_core::error::{AppError, ErrorKind};

use crate::dto::request::{LoginRequest, validate_request};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    validate_request(&req)?;

    // Argon2 verification is CPU-bound.
    let authenticator = state.authenticator.clone();
    let issued = tokio::task::spawn_blocking(move || {
        authenticator.login(req.username.trim(), &req.password)
    })
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Internal, "Login task failed", e))??;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: issued.token,
        token_type: "Bearer".to_string(),
        expires_at: issued.expires_at,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.jwt_decoder.revoke(&admin.claims).await?;
    tracing::info!(username = admin.username(), "Admin logged out");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}
