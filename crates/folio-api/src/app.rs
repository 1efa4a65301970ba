//! Application builder: wires router, middleware, and state into an Axum
//! app and runs the server.

use std::net::SocketAddr;

use axum::Router;
use tracing::{error, info, warn};

use folio_core::config::AppConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_database::seed::sample_photos;
use folio_service::ContactService;
use folio_storage::StorageManager;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Open every backing service described by `config` and assemble the
/// shared state. Fails on a weak `auth.jwt_secret` unless
/// `auth.allow_insecure_secret` is set. Seeds the sample gallery when configured and the store
/// is empty.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    // ── Step 0: Refuse a forgeable token secret ──────────────────
    config.auth.check_signing_secret()?;
    if config.auth.allow_insecure_secret && config.auth.has_weak_secret() {
        warn!("auth.jwt_secret is weak; allowed by auth.allow_insecure_secret");
    }

    // ── Step 1: Open photo store ─────────────────────────────────
    info!(backend = ?config.database.backend, "Opening photo store...");
    let store = folio_database::open_store(&config.database).await?;

    // ── Step 2: Initialize blob storage ──────────────────────────
    info!(provider = %config.storage.provider, "Initializing blob storage...");
    let storage = StorageManager::from_config(&config.storage).await?;

    // ── Step 3: Initialize contact delivery ──────────────────────
    let contact = ContactService::from_config(&config.contact)?;

    // ── Step 4: Wire services ────────────────────────────────────
    let seed_on_start = config.database.seed_on_start;
    let state = AppState::new(config, store, storage, contact);

    // ── Step 5: Seed sample gallery ──────────────────────────────
    if seed_on_start {
        let inserted = state.gallery.seed(&sample_photos()).await?;
        if inserted > 0 {
            info!(inserted, "Seeded sample gallery");
        }
    }

    Ok(state)
}

/// Runs the Folio server with the given configuration.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting Folio server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config).await?;
    let app = build_app(state);

    // ── Step 6: Bind and serve ───────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, format!("Failed to bind {addr}"), e)
    })?;
    info!("Folio server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Folio server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
