//! Photo store trait.

use async_trait::async_trait;

use folio_core::result::AppResult;
use folio_entity::photo::{NewPhoto, Photo, PhotoPatch};

/// Persistence for gallery photos.
///
/// Listing order is always `position DESC, id DESC`. Implementations
/// surface every failure as an error; callers decide whether to degrade.
#[async_trait]
pub trait PhotoStore: Send + Sync + std::fmt::Debug + 'static {
    /// Backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// List photos in display order, optionally including hidden ones.
    async fn list(&self, include_hidden: bool) -> AppResult<Vec<Photo>>;

    /// Find a photo by id, hidden or not.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Photo>>;

    /// The first visible, hero-eligible photo in display order.
    async fn find_hero(&self) -> AppResult<Option<Photo>>;

    /// Insert a photo above every existing one.
    async fn insert(&self, photo: &NewPhoto) -> AppResult<Photo>;

    /// Apply a partial update. Returns `None` when the id does not exist.
    async fn update(&self, id: i32, patch: &PhotoPatch) -> AppResult<Option<Photo>>;

    /// Mark a photo hidden. Returns whether a row matched.
    async fn hide(&self, id: i32) -> AppResult<bool>;

    /// Remove a photo permanently. Returns whether a row matched.
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Rewrite positions so that `ids[0]` is shown first.
    ///
    /// Rows are written one at a time without a transaction. Unknown ids are
    /// skipped. Returns the number of rows updated.
    async fn reorder(&self, ids: &[i32]) -> AppResult<u64>;

    /// Total number of photos, hidden included.
    async fn count(&self) -> AppResult<i64>;

    /// Whether the store holds no photos at all.
    async fn is_empty(&self) -> AppResult<bool> {
        Ok(self.count().await? == 0)
    }

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Position for `ids[index]` when `ids` lists the full display order.
pub fn position_for(index: usize, len: usize) -> i32 {
    (len - 1 - index) as i32
}
