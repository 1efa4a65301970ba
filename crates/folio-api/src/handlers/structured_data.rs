//! JSON-LD for the public site.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use folio_service::structured_data::{image_gallery_schema, person_schema, website_schema};

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/structured-data
pub async fn structured_data(State(state): State<AppState>) -> Json<ApiResponse<Value>> {
    let site = &state.config.site;
    let photos = state.gallery.public_photos().await;

    Json(ApiResponse::ok(json!({
        "person": person_schema(site),
        "website": website_schema(site),
        "gallery": image_gallery_schema(site, &photos),
    })))
}
