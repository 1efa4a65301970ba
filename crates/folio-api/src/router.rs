//! Route definitions for the Folio HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. Local blob
//! files are served under the path of the local provider's public URL.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::handlers::admin::upload::MAX_BATCH_FILES;
use crate::middleware;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Multipart framing allowance on top of the file bytes.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes())
        .merge(throttled_routes(&state))
        .merge(admin_routes())
        .merge(upload_routes(&state));

    let mut app = Router::new().nest("/api", api_routes);
    if let Some((mount, root)) = media_mount(&state) {
        tracing::info!(mount = %mount, root = %root, "Serving local media");
        app = app.nest_service(&mount, ServeDir::new(root));
    }

    app.layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&state.config.server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Health, gallery, structured data, and logout.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
        .route("/gallery", get(handlers::gallery::list))
        .route("/gallery/hero", get(handlers::gallery::hero))
        .route("/gallery/photos/{slug}", get(handlers::gallery::detail))
        .route("/gallery/categories", get(handlers::gallery::categories))
        .route(
            "/structured-data",
            get(handlers::structured_data::structured_data),
        )
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Login and contact, behind the per-client rate limiter.
fn throttled_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/contact", post(handlers::contact::submit))
        .route_layer(axum_middleware::from_fn_with_state(
            state.rate_limiter.clone(),
            middleware::rate_limit::rate_limit,
        ))
}

/// Photo management.
fn admin_routes() -> Router<AppState> {
    use handlers::admin::photos;

    Router::new()
        .route("/admin/photos", get(photos::list).post(photos::create))
        .route("/admin/photos/stats", get(photos::stats))
        .route("/admin/photos/reorder", post(photos::reorder))
        .route("/admin/photos/bulk-delete", post(photos::bulk_delete))
        .route(
            "/admin/photos/{id}",
            put(photos::update).delete(photos::delete),
        )
        .route("/admin/photos/{id}/visibility", post(photos::visibility))
}

/// Uploads, with a body limit sized for the configured file ceiling.
fn upload_routes(state: &AppState) -> Router<AppState> {
    use handlers::admin::upload;

    let max_file = usize::try_from(state.uploads.max_bytes()).unwrap_or(usize::MAX);
    let single_limit = max_file.saturating_add(MULTIPART_OVERHEAD);
    let batch_limit = max_file
        .saturating_mul(MAX_BATCH_FILES)
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route(
            "/admin/upload",
            post(upload::upload_single).layer(DefaultBodyLimit::max(single_limit)),
        )
        .route(
            "/admin/upload/batch",
            post(upload::upload_batch).layer(DefaultBodyLimit::max(batch_limit)),
        )
}

/// Mount path and directory for local media, when the local provider is active.
fn media_mount(state: &AppState) -> Option<(String, String)> {
    let storage = &state.config.storage;
    if storage.provider != "local" {
        return None;
    }
    let path = media_path(&storage.local.public_base_url)?;
    Some((path, storage.local.root_path.clone()))
}

/// Path component of a public base URL, absolute or relative.
pub fn media_path(public_base_url: &str) -> Option<String> {
    let raw = if public_base_url.starts_with('/') {
        public_base_url.to_string()
    } else {
        public_base_url.parse::<http::Uri>().ok()?.path().to_string()
    };
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "/api" || trimmed.starts_with("/api/") {
        return None;
    }
    Some(trimmed.to_string())
}
