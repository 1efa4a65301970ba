//! Gallery data access.
//!
//! Every store failure is logged here and degraded to an empty list,
//! `None`, or `false`; callers never see a storage error. Successful writes
//! invalidate the public gallery cache.

use std::sync::Arc;

use tracing::{error, info};

use folio_cache::GalleryCache;
use folio_core::result::AppResult;
use folio_database::PhotoStore;
use folio_entity::photo::{Category, NewPhoto, Photo, PhotoPatch};

use super::stats::PhotoStats;

/// Number of related photos shown on a detail page.
pub const RELATED_LIMIT: usize = 3;

/// Reads and writes gallery photos.
#[derive(Debug, Clone)]
pub struct GalleryService {
    store: Arc<dyn PhotoStore>,
    cache: GalleryCache,
}

impl GalleryService {
    /// Creates a new gallery service.
    pub fn new(store: Arc<dyn PhotoStore>, cache: GalleryCache) -> Self {
        Self { store, cache }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn PhotoStore> {
        &self.store
    }

    // ── Reads ──────────────────────────────────────────────

    /// Visible photos in display order, served from cache when fresh.
    pub async fn public_photos(&self) -> Vec<Photo> {
        let result = self
            .cache
            .public_photos(|| async { self.store.list(false).await })
            .await;
        degrade(result, "list public photos").unwrap_or_default()
    }

    /// Every photo including hidden ones, for the admin screen.
    pub async fn all_photos(&self) -> Vec<Photo> {
        degrade(self.store.list(true).await, "list all photos").unwrap_or_default()
    }

    /// A single photo by id, hidden or not.
    pub async fn photo(&self, id: i32) -> Option<Photo> {
        degrade(self.store.find_by_id(id).await, "fetch photo").flatten()
    }

    /// The current homepage hero.
    pub async fn hero(&self) -> Option<Photo> {
        let result = self.cache.hero(|| async { self.store.find_hero().await }).await;
        degrade(result, "fetch hero photo").flatten()
    }

    /// First visible photo whose title slug equals `slug`.
    pub async fn by_slug(&self, slug: &str) -> Option<Photo> {
        self.public_photos()
            .await
            .into_iter()
            .find(|photo| photo.slug() == slug)
    }

    /// Visible photos sharing `photo`'s category, excluding it.
    pub async fn related(&self, photo: &Photo, limit: usize) -> Vec<Photo> {
        self.public_photos()
            .await
            .into_iter()
            .filter(|p| p.category == photo.category && p.id != photo.id)
            .take(limit)
            .collect()
    }

    /// Visible photos in one category.
    pub async fn by_category(&self, category: Category) -> Vec<Photo> {
        self.public_photos()
            .await
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Counts over every photo, hidden included.
    pub async fn stats(&self) -> PhotoStats {
        PhotoStats::from_photos(&self.all_photos().await)
    }

    /// Whether the store answers.
    pub async fn health(&self) -> bool {
        degrade(self.store.health_check().await, "check store health").unwrap_or(false)
    }

    // ── Writes ─────────────────────────────────────────────

    /// Insert a photo on top of the gallery.
    pub async fn add(&self, photo: &NewPhoto) -> Option<Photo> {
        let added = degrade(self.store.insert(photo).await, "add photo")?;
        info!(photo_id = added.id, title = %added.title, "Photo added");
        self.cache.invalidate().await;
        Some(added)
    }

    /// Apply a partial update.
    pub async fn update(&self, id: i32, patch: &PhotoPatch) -> Option<Photo> {
        let updated = degrade(self.store.update(id, patch).await, "update photo").flatten()?;
        info!(photo_id = id, "Photo updated");
        self.cache.invalidate().await;
        Some(updated)
    }

    /// Soft-delete a photo.
    pub async fn hide(&self, id: i32) -> bool {
        let hidden = degrade(self.store.hide(id).await, "hide photo").unwrap_or(false);
        if hidden {
            info!(photo_id = id, "Photo hidden");
            self.cache.invalidate().await;
        }
        hidden
    }

    /// Make a hidden photo public again.
    pub async fn unhide(&self, id: i32) -> bool {
        let patch = PhotoPatch {
            hidden: Some(false),
            ..Default::default()
        };
        self.update(id, &patch).await.is_some()
    }

    /// Remove a photo permanently.
    pub async fn delete(&self, id: i32) -> bool {
        let deleted = degrade(self.store.delete(id).await, "delete photo").unwrap_or(false);
        if deleted {
            info!(photo_id = id, "Photo deleted");
            self.cache.invalidate().await;
        }
        deleted
    }

    /// Rewrite positions so `ids` is the new display order.
    ///
    /// A failure part-way through leaves earlier rows rewritten.
    pub async fn reorder(&self, ids: &[i32]) -> bool {
        let result = self.store.reorder(ids).await;
        // Some rows may have moved before a failure.
        self.cache.invalidate().await;
        match degrade(result, "reorder photos") {
            Some(updated) => {
                info!(requested = ids.len(), updated, "Photos reordered");
                true
            }
            None => false,
        }
    }

    /// Insert `photos` only when the store is empty. Returns how many were
    /// inserted.
    pub async fn seed(&self, photos: &[NewPhoto]) -> AppResult<usize> {
        if !self.store.is_empty().await? {
            info!("Gallery already has photos, skipping seed");
            return Ok(0);
        }
        for photo in photos {
            self.store.insert(photo).await?;
        }
        self.cache.invalidate().await;
        info!(count = photos.len(), "Seeded gallery");
        Ok(photos.len())
    }
}

/// Log a store error and turn it into `None`.
fn degrade<T>(result: AppResult<T>, action: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!(action, error = %e, "Gallery store operation failed");
            None
        }
    }
}
