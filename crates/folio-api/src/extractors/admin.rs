//! `AdminUser` extractor: pulls the bearer token, validates it, and gates
//! admin routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use folio_auth::Claims;
use folio_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated administrator.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Validated token claims.
    pub claims: Claims,
}

impl AdminUser {
    /// Admin username.
    pub fn username(&self) -> &str {
        &self.claims.sub
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // No configured admin means no token can be legitimate.
        if state.config.auth.admin_password_hash.is_empty() {
            return Err(AppError::service_unavailable("Admin login is not configured").into());
        }

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::authentication("Missing or malformed bearer token"))?;

        let claims = state.jwt_decoder.decode(bearer.token()).await?;
        Ok(AdminUser { claims })
    }
}
