//! Photo management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use folio_service::PhotoStats;
use folio_service::admin::PhotoInput;

use crate::dto::request::{BulkDeleteRequest, DeleteQuery, ReorderRequest, VisibilityRequest};
use crate::dto::response::{ApiResponse, PhotoView};
use crate::extractors::AdminUser;
use crate::handlers::action_response;
use crate::state::AppState;

/// GET /api/admin/photos
pub async fn list(State(state): State<AppState>, _admin: AdminUser) -> Json<ApiResponse<Vec<PhotoView>>> {
    let photos = state
        .gallery
        .all_photos()
        .await
        .into_iter()
        .map(PhotoView::from)
        .collect();
    Json(ApiResponse::ok(photos))
}

/// GET /api/admin/photos/stats
pub async fn stats(State(state): State<AppState>, _admin: AdminUser) -> Json<ApiResponse<PhotoStats>> {
    Json(ApiResponse::ok(state.gallery.stats().await))
}

/// POST /api/admin/photos
pub async fn create(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(input): Json<PhotoInput>,
) -> Response {
    let result = state.actions.add(&input).await;
    if let Some(photo) = &result.data {
        tracing::info!(photo_id = photo.id, admin = admin.username(), "Photo added");
    }
    action_response(result, StatusCode::CREATED)
}

/// PUT /api/admin/photos/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i32>,
    Json(input): Json<PhotoInput>,
) -> Response {
    let result = state.actions.update(id, &input).await;
    if result.success {
        tracing::info!(photo_id = id, admin = admin.username(), "Photo updated");
    }
    action_response(result, StatusCode::OK)
}

/// DELETE /api/admin/photos/{id}?permanent=
pub async fn delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i32>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    let result = state.actions.delete(id, query.permanent).await;
    if result.success {
        tracing::info!(photo_id = id, permanent = query.permanent, admin = admin.username(), "Photo removed");
    }
    action_response(result, StatusCode::OK)
}

/// POST /api/admin/photos/{id}/visibility
pub async fn visibility(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(req): Json<VisibilityRequest>,
) -> Response {
    action_response(state.actions.set_visibility(id, req.hidden).await, StatusCode::OK)
}

/// POST /api/admin/photos/reorder
pub async fn reorder(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<ReorderRequest>,
) -> Response {
    action_response(state.actions.reorder(&req.ids).await, StatusCode::OK)
}

/// POST /api/admin/photos/bulk-delete
pub async fn bulk_delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<BulkDeleteRequest>,
) -> Response {
    let result = state.actions.bulk_delete(&req.ids, req.permanent).await;
    if let Some(report) = &result.data {
        tracing::info!(
            deleted = report.deleted,
            failed = report.failed,
            permanent = req.permanent,
            admin = admin.username(),
            "Bulk delete finished"
        );
    }
    action_response(result, StatusCode::OK)
}
