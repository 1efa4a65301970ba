//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use folio_core::error::{AppError, ErrorKind};

const GENERIC_MESSAGE: &str = "An unexpected error occurred";
const LOGIN_HINT: &str = "Log in with POST /api/auth/login and send the token as 'Authorization: Bearer <token>'";

/// Error details inside the response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// How to recover, when there is a standard way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Standard API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Error details.
    pub error: ApiErrorBody,
}

/// An [`AppError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status and error code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Image => (StatusCode::BAD_REQUEST, "INVALID_IMAGE"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::RateLimit => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
        ErrorKind::Storage => (StatusCode::BAD_GATEWAY, "STORAGE_ERROR"),
        ErrorKind::ExternalService => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        ErrorKind::ServiceUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Cache
        | ErrorKind::Configuration
        | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, code) = status_for(err.kind);

        let message = if err.is_client_safe() {
            err.message.clone()
        } else {
            tracing::error!(kind = ?err.kind, error = %err, "Request failed");
            GENERIC_MESSAGE.to_string()
        };
        if status.is_server_error() && err.is_client_safe() {
            tracing::warn!(kind = ?err.kind, error = %err, "Request failed");
        }

        let hint = (status == StatusCode::UNAUTHORIZED).then(|| LOGIN_HINT.to_string());

        let body = ApiErrorResponse {
            success: false,
            error: ApiErrorBody {
                code: code.to_string(),
                message,
                hint,
            },
        };

        (status, Json(body)).into_response()
    }
}
