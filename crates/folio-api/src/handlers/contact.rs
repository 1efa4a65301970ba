//! Contact form handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use folio_service::contact::ContactForm;

use crate::handlers::action_response;
use crate::state::AppState;

/// POST /api/contact
pub async fn submit(State(state): State<AppState>, Json(form): Json<ContactForm>) -> Response {
    action_response(state.contact.submit(&form).await, StatusCode::OK)
}
