//! Time-boxed cache of public gallery reads.
//!
//! Entries live for `gallery_ttl_seconds` and are dropped by
//! [`GalleryCache::invalidate`] after every admin write. A generation
//! counter keeps a load that raced with an invalidation from writing its
//! stale result back.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use folio_core::result::AppResult;
use folio_core::traits::cache::CacheProvider;
use folio_entity::photo::Photo;

use crate::keys;
use crate::provider::CacheManager;

/// Cache for the public listing and the hero photo.
#[derive(Debug, Clone)]
pub struct GalleryCache {
    cache: CacheManager,
    ttl: Duration,
    generation: Arc<AtomicU64>,
}

impl GalleryCache {
    /// Create a gallery cache on top of the shared cache.
    pub fn new(cache: CacheManager, ttl: Duration) -> Self {
        Self {
            cache,
            ttl,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Public listing, loading it on a miss.
    pub async fn public_photos<F, Fut>(&self, loader: F) -> AppResult<Vec<Photo>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<Vec<Photo>>> + Send,
    {
        self.get_or_load(&keys::public_gallery(), loader).await
    }

    /// Hero photo, loading it on a miss.
    pub async fn hero<F, Fut>(&self, loader: F) -> AppResult<Option<Photo>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<Option<Photo>>> + Send,
    {
        self.get_or_load(&keys::hero_photo(), loader).await
    }

    /// Drop every cached gallery read.
    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        match self.cache.delete_pattern(&keys::gallery_pattern()).await {
            Ok(count) => debug!(count, "Gallery cache invalidated"),
            Err(e) => warn!(error = %e, "Failed to invalidate gallery cache"),
        }
    }

    async fn get_or_load<T, F, Fut>(&self, key: &str, loader: F) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<T>> + Send,
    {
        match self.cache.get_json::<T>(key).await {
            Ok(Some(hit)) => return Ok(hit),
            Ok(None) => {}
            Err(e) => warn!(key, error = %e, "Gallery cache read failed, loading fresh"),
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let value = loader().await?;

        if self.generation.load(Ordering::SeqCst) == generation {
            if let Err(e) = self.cache.set_json(key, &value, self.ttl).await {
                warn!(key, error = %e, "Gallery cache write failed");
            }
        } else {
            debug!(key, "Gallery changed during load, not caching");
        }
        Ok(value)
    }
}
