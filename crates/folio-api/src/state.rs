//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_auth::{AdminAuthenticator, JwtDecoder};
use folio_cache::{CacheManager, GalleryCache};
use folio_core::config::AppConfig;
use folio_database::PhotoStore;
use folio_service::{ContactService, GalleryService, PhotoActions, UploadService};
use folio_storage::StorageManager;

use crate::middleware::rate_limit::RateLimiter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Every field is an
/// `Arc` or a cheap handle around one.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// In-process cache
    pub cache: CacheManager,
    /// Blob storage
    pub storage: StorageManager,

    // ── Auth ─────────────────────────────────────────────────
    /// Admin credential check and token issuing
    pub authenticator: AdminAuthenticator,
    /// Token validation and revocation
    pub jwt_decoder: JwtDecoder,
    /// Login and contact throttling
    pub rate_limiter: RateLimiter,

    // ── Services ─────────────────────────────────────────────
    /// Gallery reads and writes
    pub gallery: GalleryService,
    /// Admin photo actions
    pub actions: PhotoActions,
    /// Image uploads
    pub uploads: UploadService,
    /// Contact form
    pub contact: ContactService,
}

impl AppState {
    /// Wire services around an opened photo store, blob storage, and
    /// contact delivery.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn PhotoStore>,
        storage: StorageManager,
        contact: ContactService,
    ) -> Self {
        let cache = CacheManager::new(&config.cache);
        let gallery_cache = GalleryCache::new(
            cache.clone(),
            Duration::from_secs(config.cache.gallery_ttl_seconds),
        );
        let gallery = GalleryService::new(store, gallery_cache);

        Self {
            started_at: Instant::now(),
            authenticator: AdminAuthenticator::new(&config.auth),
            jwt_decoder: JwtDecoder::new(&config.auth, cache.clone()),
            rate_limiter: RateLimiter::from_config(&config.server.rate_limit),
            actions: PhotoActions::new(gallery.clone()),
            uploads: UploadService::new(storage.clone(), &config.storage.upload),
            gallery,
            contact,
            storage,
            cache,
            config: Arc::new(config),
        }
    }
}
