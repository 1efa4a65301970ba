//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod contact;
pub mod gallery;
pub mod health;
pub mod structured_data;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use folio_service::ActionResult;

/// Send an action outcome: `status` on success, 400 with the
/// user-visible error otherwise.
pub(crate) fn action_response<T: Serialize>(result: ActionResult<T>, status: StatusCode) -> Response {
    let status = if result.success {
        status
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(result)).into_response()
}
