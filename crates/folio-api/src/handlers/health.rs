//! Health check handlers.

use axum::Json;
use axum::extract::State;

use folio_core::traits::{CacheProvider, StorageProvider};

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

fn status_word(ok: bool, up: &str) -> String {
    if ok { up.to_string() } else { "unavailable".to_string() }
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let (database, cache, storage) = tokio::join!(
        state.gallery.health(),
        state.cache.health_check(),
        state.storage.health_check(),
    );
    let cache = cache.unwrap_or(false);
    let storage = storage.unwrap_or(false);
    let all_ok = database && cache && storage;

    Json(ApiResponse::ok(DetailedHealthResponse {
        status: if all_ok { "ok" } else { "degraded" }.to_string(),
        database: status_word(database, "connected"),
        cache: status_word(cache, "connected"),
        storage: status_word(storage, "available"),
        storage_provider: state.storage.provider().provider_type().to_string(),
    }))
}
