//! Infinite-scroll paging over the public gallery.

use serde::Serialize;

use folio_entity::{Category, Photo};

/// Photos revealed per batch.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// One page of an offset-based listing.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryPage<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Offset of the next page, if any.
    pub next_offset: Option<usize>,
    /// Whether more items follow.
    pub has_more: bool,
    /// Total number of items across all pages.
    pub total: usize,
}

impl<T: Clone> GalleryPage<T> {
    /// Cut `[offset, offset + limit)` out of `items`.
    pub fn slice(items: &[T], offset: usize, limit: usize) -> Self {
        let total = items.len();
        let start = offset.min(total);
        let end = start.saturating_add(limit).min(total);
        let has_more = end < total;
        Self {
            items: items[start..end].to_vec(),
            next_offset: has_more.then_some(end),
            has_more,
            total,
        }
    }
}

/// Client-side window over the gallery, grown one batch at a time as the
/// scroll sentinel comes into view.
#[derive(Debug, Clone)]
pub struct GalleryPager {
    photos: Vec<Photo>,
    filter: Option<Category>,
    batch_size: usize,
    shown: usize,
}

impl GalleryPager {
    /// Pager over `photos` with the default batch size.
    pub fn new(photos: Vec<Photo>) -> Self {
        Self::with_batch_size(photos, DEFAULT_BATCH_SIZE)
    }

    /// Pager with a custom batch size (at least 1).
    pub fn with_batch_size(photos: Vec<Photo>, batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);
        let mut pager = Self {
            photos,
            filter: None,
            batch_size,
            shown: 0,
        };
        pager.shown = batch_size.min(pager.filtered_len());
        pager
    }

    fn matches(&self, photo: &Photo) -> bool {
        self.filter.is_none_or(|c| photo.category == c)
    }

    fn filtered_len(&self) -> usize {
        self.photos.iter().filter(|p| self.matches(p)).count()
    }

    /// The active category filter.
    pub fn category(&self) -> Option<Category> {
        self.filter
    }

    /// Photos currently revealed.
    pub fn visible(&self) -> Vec<&Photo> {
        self.photos
            .iter()
            .filter(|p| self.matches(p))
            .take(self.shown)
            .collect()
    }

    /// Reveal one more batch. Returns how many photos were added.
    pub fn load_more(&mut self) -> usize {
        let before = self.shown;
        self.shown = (self.shown + self.batch_size).min(self.filtered_len());
        self.shown - before
    }

    /// Whether any matching photos are still hidden.
    pub fn has_more(&self) -> bool {
        self.shown < self.filtered_len()
    }

    /// Switch the category filter and reset to the first batch.
    pub fn set_category(&mut self, filter: Option<Category>) {
        self.filter = filter;
        self.shown = self.batch_size.min(self.filtered_len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_entity::{FrameColor, FrameThickness, MatColor, MatThickness};

    fn photo(id: i32, category: Category) -> Photo {
        let now = Utc::now();
        Photo {
            id,
            title: format!("Photo {id}"),
            alt: String::new(),
            category,
            src: format!("https://cdn.example.com/{id}.jpg"),
            position: id,
            hidden: false,
            hero_eligible: false,
            passepartout_color: MatColor::default(),
            passepartout_thickness: MatThickness::default(),
            frame_color: FrameColor::default(),
            frame_thickness: FrameThickness::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn photos(n: i32) -> Vec<Photo> {
        (1..=n)
            .map(|id| {
                let category = if id % 2 == 0 {
                    Category::Urban
                } else {
                    Category::Nature
                };
                photo(id, category)
            })
            .collect()
    }

    #[test]
    fn grows_by_batches_until_exhausted() {
        let mut pager = GalleryPager::new(photos(45));
        assert_eq!(pager.visible().len(), 20);
        assert!(pager.has_more());

        assert_eq!(pager.load_more(), 20);
        assert_eq!(pager.load_more(), 5);
        assert!(!pager.has_more());
        assert_eq!(pager.load_more(), 0);
        assert_eq!(pager.visible().len(), 45);
    }

    #[test]
    fn category_change_resets_window() {
        let mut pager = GalleryPager::with_batch_size(photos(10), 2);
        pager.load_more();
        assert_eq!(pager.visible().len(), 4);

        pager.set_category(Some(Category::Urban));
        let visible = pager.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == Category::Urban));
        assert!(pager.has_more());

        pager.set_category(Some(Category::Portrait));
        assert!(pager.visible().is_empty());
        assert!(!pager.has_more());
    }

    #[test]
    fn page_slice_reports_next_offset() {
        let items: Vec<i32> = (0..25).collect();
        let first = GalleryPage::slice(&items, 0, 20);
        assert_eq!(first.items.len(), 20);
        assert_eq!(first.next_offset, Some(20));

        let last = GalleryPage::slice(&items, 20, 20);
        assert_eq!(last.items, vec![20, 21, 22, 23, 24]);
        assert!(!last.has_more);
        assert_eq!(last.next_offset, None);

        let past = GalleryPage::slice(&items, 100, 20);
        assert!(past.items.is_empty());
        assert_eq!(past.total, 25);
    }
}
