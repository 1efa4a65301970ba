//! Process-local photo store.
//!
//! Mirrors the PostgreSQL semantics (ordering, position assignment,
//! partial updates, sequential reorder) so the whole application can run
//! without a database for demos and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use folio_core::result::AppResult;
use folio_entity::photo::{NewPhoto, Photo, PhotoPatch};

use crate::store::{PhotoStore, position_for};

#[derive(Debug, Default)]
struct State {
    next_id: i32,
    rows: BTreeMap<i32, Photo>,
}

/// In-memory [`PhotoStore`].
#[derive(Debug, Default)]
pub struct MemoryPhotoStore {
    state: RwLock<State>,
}

impl MemoryPhotoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted<'a>(rows: impl Iterator<Item = &'a Photo>) -> Vec<Photo> {
        let mut photos: Vec<Photo> = rows.cloned().collect();
        photos.sort_by(Photo::display_order);
        photos
    }
}

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, include_hidden: bool) -> AppResult<Vec<Photo>> {
        let state = self.state.read().await;
        Ok(Self::sorted(
            state.rows.values().filter(|p| include_hidden || !p.hidden),
        ))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Photo>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_hero(&self) -> AppResult<Option<Photo>> {
        let state = self.state.read().await;
        Ok(Self::sorted(
            state.rows.values().filter(|p| p.hero_eligible && !p.hidden),
        )
        .into_iter()
        .next())
    }

    async fn insert(&self, photo: &NewPhoto) -> AppResult<Photo> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let id = state.next_id;
        let position = state.rows.values().map(|p| p.position).max().unwrap_or(-1) + 1;
        let now = Utc::now();
        let record = Photo {
            id,
            title: photo.title.clone(),
            alt: photo.alt.clone(),
            category: photo.category,
            src: photo.src.clone(),
            position,
            hidden: photo.hidden,
            hero_eligible: photo.hero_eligible,
            passepartout_color: photo.passepartout_color,
            passepartout_thickness: photo.passepartout_thickness,
            frame_color: photo.frame_color,
            frame_thickness: photo.frame_thickness,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, patch: &PhotoPatch) -> AppResult<Option<Photo>> {
        let mut state = self.state.write().await;
        Ok(state.rows.get_mut(&id).map(|photo| {
            patch.apply_to(photo);
            photo.updated_at = Utc::now();
            photo.clone()
        }))
    }

    async fn hide(&self, id: i32) -> AppResult<bool> {
        let mut state = self.state.write().await;
        Ok(match state.rows.get_mut(&id) {
            Some(photo) => {
                photo.hidden = true;
                photo.updated_at = Utc::now();
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn reorder(&self, ids: &[i32]) -> AppResult<u64> {
        let mut updated = 0;
        for (index, id) in ids.iter().enumerate() {
            let mut state = self.state.write().await;
            if let Some(photo) = state.rows.get_mut(id) {
                photo.position = position_for(index, ids.len());
                photo.updated_at = Utc::now();
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.state.read().await.rows.len() as i64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_entity::photo::Category;

    fn new_photo(title: &str) -> NewPhoto {
        NewPhoto::new(
            title,
            title,
            Category::Landscape,
            format!("https://cdn.example.com/{title}.jpg"),
        )
    }

    #[tokio::test]
    async fn insert_places_new_photo_on_top() {
        let store = MemoryPhotoStore::new();
        let first = store.insert(&new_photo("a")).await.unwrap();
        let second = store.insert(&new_photo("b")).await.unwrap();
        assert_eq!(first.position, 0);
        assert!(second.position > first.position);

        let listed = store.list(false).await.unwrap();
        assert_eq!(listed[0].id, second.id);
    }

    #[tokio::test]
    async fn hide_excludes_from_public_listing_only() {
        let store = MemoryPhotoStore::new();
        let photo = store.insert(&new_photo("a")).await.unwrap();
        assert!(store.hide(photo.id).await.unwrap());
        assert!(store.list(false).await.unwrap().is_empty());
        assert_eq!(store.list(true).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reorder_yields_requested_order() {
        let store = MemoryPhotoStore::new();
        for t in ["one", "two", "three"] {
            store.insert(&new_photo(t)).await.unwrap();
        }
        let updated = store.reorder(&[3, 1, 2]).await.unwrap();
        assert_eq!(updated, 3);
        let ids: Vec<i32> = store.list(true).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn reorder_skips_unknown_ids() {
        let store = MemoryPhotoStore::new();
        store.insert(&new_photo("one")).await.unwrap();
        assert_eq!(store.reorder(&[1, 99]).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn hero_is_latest_visible_eligible() {
        let store = MemoryPhotoStore::new();
        let old = store.insert(&new_photo("old").hero()).await.unwrap();
        let newer = store.insert(&new_photo("newer").hero()).await.unwrap();
        store.insert(&new_photo("plain")).await.unwrap();
        assert_eq!(store.find_hero().await.unwrap().unwrap().id, newer.id);

        store.hide(newer.id).await.unwrap();
        assert_eq!(store.find_hero().await.unwrap().unwrap().id, old.id);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let store = MemoryPhotoStore::new();
        let patch = PhotoPatch {
            title: Some("x".into()),
            ..Default::default()
        };
        assert!(store.update(42, &patch).await.unwrap().is_none());
    }
}
