//! Admin photo actions.
//!
//! Each action validates and sanitizes its input, calls the gallery
//! service, and reports the outcome as an [`ActionResult`] whose `error`
//! string is shown to the admin verbatim.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use folio_core::AppError;
use folio_entity::photo::{
    Category, FrameColor, FrameThickness, MatColor, MatThickness, NewPhoto, Photo, PhotoPatch,
};

use crate::gallery::GalleryService;

/// Outcome of an admin action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult<T = ()> {
    /// Whether the action succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    /// Successful result carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed result with a user-visible message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl ActionResult<()> {
    /// Successful result without a payload.
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

/// Counts reported by a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteReport {
    /// Ids hidden or deleted.
    pub deleted: usize,
    /// Ids that could not be processed.
    pub failed: usize,
}

/// Photo form fields as submitted by the admin screen.
///
/// Style fields accept their lowercase names; empty means `none`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoInput {
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Alt text.
    #[serde(default)]
    pub alt: Option<String>,
    /// Category name.
    #[serde(default)]
    pub category: Option<String>,
    /// Public image URL.
    #[serde(default)]
    pub src: Option<String>,
    /// Hero candidacy.
    #[serde(default)]
    pub hero_eligible: Option<bool>,
    /// Mat colour.
    #[serde(default)]
    pub passepartout_color: Option<String>,
    /// Mat thickness.
    #[serde(default)]
    pub passepartout_thickness: Option<String>,
    /// Frame colour.
    #[serde(default)]
    pub frame_color: Option<String>,
    /// Frame thickness.
    #[serde(default)]
    pub frame_thickness: Option<String>,
}

/// Trim and drop `<script>` blocks from free text.
pub fn sanitize(input: &str) -> String {
    let mut out = input.trim().to_string();
    loop {
        let lower = out.to_ascii_lowercase();
        let Some(start) = lower.find("<script") else {
            break;
        };
        let end = match lower[start..].find("</script") {
            Some(close) => {
                let close = start + close;
                lower[close..].find('>').map_or(lower.len(), |gt| close + gt + 1)
            }
            None => lower[start..].find('>').map_or(lower.len(), |gt| start + gt + 1),
        };
        out.replace_range(start..end, "");
    }
    out.trim().to_string()
}

/// Whether `url` parses as an absolute http(s) URL.
pub fn is_valid_image_url(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn clean(field: &Option<String>) -> String {
    field.as_deref().map(sanitize).unwrap_or_default()
}

fn parse_opt<T>(raw: &Option<String>) -> Result<Option<T>, AppError>
where
    T: FromStr<Err = AppError>,
{
    raw.as_deref().map(|s| s.parse::<T>()).transpose()
}

fn parse_or_default<T>(raw: &Option<String>) -> Result<T, AppError>
where
    T: FromStr<Err = AppError> + Default,
{
    Ok(parse_opt(raw)?.unwrap_or_default())
}

/// Server-side admin actions over the gallery.
#[derive(Debug, Clone)]
pub struct PhotoActions {
    gallery: GalleryService,
}

impl PhotoActions {
    /// Creates the admin actions.
    pub fn new(gallery: GalleryService) -> Self {
        Self { gallery }
    }

    /// Add a photo. Title defaults to "Untitled", alt to the title.
    pub async fn add(&self, input: &PhotoInput) -> ActionResult<Photo> {
        let title = clean(&input.title);
        let alt = clean(&input.alt);
        let src = clean(&input.src);

        if src.is_empty() {
            return ActionResult::fail("Image URL is required");
        }
        if !is_valid_image_url(&src) {
            return ActionResult::fail("Invalid image URL");
        }

        let photo = match Self::new_photo(input, title, alt, src) {
            Ok(photo) => photo,
            Err(e) => return ActionResult::fail(e.message),
        };

        match self.gallery.add(&photo).await {
            Some(added) => ActionResult::ok(added),
            None => ActionResult::fail("Failed to add photo"),
        }
    }

    fn new_photo(
        input: &PhotoInput,
        title: String,
        alt: String,
        src: String,
    ) -> Result<NewPhoto, AppError> {
        let category: Category = clean(&input.category).parse()?;
        let alt = match (alt.is_empty(), title.is_empty()) {
            (false, _) => alt,
            (true, false) => title.clone(),
            (true, true) => "Photo".to_string(),
        };
        let title = if title.is_empty() { "Untitled".to_string() } else { title };

        Ok(NewPhoto {
            title,
            alt,
            category,
            src,
            hidden: false,
            hero_eligible: input.hero_eligible.unwrap_or(false),
            passepartout_color: parse_or_default::<MatColor>(&input.passepartout_color)?,
            passepartout_thickness: parse_or_default::<MatThickness>(
                &input.passepartout_thickness,
            )?,
            frame_color: parse_or_default::<FrameColor>(&input.frame_color)?,
            frame_thickness: parse_or_default::<FrameThickness>(&input.frame_thickness)?,
        })
    }

    /// Update a photo. Title, alt text and URL are required; everything
    /// else is left unchanged when absent.
    pub async fn update(&self, id: i32, input: &PhotoInput) -> ActionResult<Photo> {
        let title = clean(&input.title);
        let alt = clean(&input.alt);
        let src = clean(&input.src);

        if title.is_empty() || alt.is_empty() || src.is_empty() {
            return ActionResult::fail("Title, alt text, and image URL are required");
        }
        if !is_valid_image_url(&src) {
            return ActionResult::fail("Invalid image URL");
        }

        let patch = match Self::patch(input, title, alt, src) {
            Ok(patch) => patch,
            Err(e) => return ActionResult::fail(e.message),
        };

        match self.gallery.update(id, &patch).await {
            Some(updated) => ActionResult::ok(updated),
            None => ActionResult::fail("Photo not found or update failed"),
        }
    }

    fn patch(
        input: &PhotoInput,
        title: String,
        alt: String,
        src: String,
    ) -> Result<PhotoPatch, AppError> {
        let category = match input.category.as_deref().map(sanitize) {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<Category>()?),
            _ => None,
        };
        Ok(PhotoPatch {
            title: Some(title),
            alt: Some(alt),
            category,
            src: Some(src),
            hidden: None,
            hero_eligible: input.hero_eligible,
            passepartout_color: parse_opt(&input.passepartout_color)?,
            passepartout_thickness: parse_opt(&input.passepartout_thickness)?,
            frame_color: parse_opt(&input.frame_color)?,
            frame_thickness: parse_opt(&input.frame_thickness)?,
        })
    }

    /// Hide a photo, or remove it when `permanent`.
    pub async fn delete(&self, id: i32, permanent: bool) -> ActionResult {
        if self.remove(id, permanent).await {
            ActionResult::done()
        } else if permanent {
            ActionResult::fail("Failed to delete photo")
        } else {
            ActionResult::fail("Failed to hide photo")
        }
    }

    /// Hide or unhide a photo.
    pub async fn set_visibility(&self, id: i32, hidden: bool) -> ActionResult {
        let changed = if hidden {
            self.gallery.hide(id).await
        } else {
            self.gallery.unhide(id).await
        };
        match (changed, hidden) {
            (true, _) => ActionResult::done(),
            (false, true) => ActionResult::fail("Failed to hide photo"),
            (false, false) => ActionResult::fail("Failed to unhide photo"),
        }
    }

    /// Save a new display order; `ids[0]` becomes the top photo.
    pub async fn reorder(&self, ids: &[i32]) -> ActionResult {
        if ids.is_empty() {
            return ActionResult::fail("Invalid order data");
        }
        if self.gallery.reorder(ids).await {
            ActionResult::done()
        } else {
            ActionResult::fail("Failed to save new order")
        }
    }

    /// Hide or delete every id in order, continuing past failures.
    pub async fn bulk_delete(&self, ids: &[i32], permanent: bool) -> ActionResult<BulkDeleteReport> {
        if ids.is_empty() {
            return ActionResult::fail("No photos selected");
        }

        let mut report = BulkDeleteReport {
            deleted: 0,
            failed: 0,
        };
        for &id in ids {
            if self.remove(id, permanent).await {
                report.deleted += 1;
            } else {
                report.failed += 1;
            }
        }

        if report.failed == ids.len() {
            warn!(count = ids.len(), permanent, "Bulk delete failed for every photo");
            return ActionResult::fail("Failed to delete any photos");
        }
        ActionResult::ok(report)
    }

    async fn remove(&self, id: i32, permanent: bool) -> bool {
        if permanent {
            self.gallery.delete(id).await
        } else {
            self.gallery.hide(id).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use folio_cache::{CacheManager, GalleryCache};
    use folio_core::config::CacheConfig;
    use folio_database::MemoryPhotoStore;

    fn actions() -> PhotoActions {
        let cache = GalleryCache::new(
            CacheManager::new(&CacheConfig::default()),
            Duration::from_secs(60),
        );
        PhotoActions::new(GalleryService::new(Arc::new(MemoryPhotoStore::new()), cache))
    }

    fn input(title: &str, src: &str) -> PhotoInput {
        PhotoInput {
            title: Some(title.into()),
            category: Some("Landscape".into()),
            src: Some(src.into()),
            ..Default::default()
        }
    }

    #[test]
    fn sanitize_strips_script_blocks() {
        assert_eq!(sanitize("  hi  "), "hi");
        assert_eq!(sanitize("a<script>alert(1)</script>b"), "ab");
        assert_eq!(sanitize("a<SCRIPT src=x>"), "a");
        assert_eq!(sanitize("<b>bold</b>"), "<b>bold</b>");
    }

    #[test]
    fn image_urls_must_be_http() {
        assert!(is_valid_image_url("https://cdn.example.com/a.jpg"));
        assert!(is_valid_image_url("http://localhost:8080/media/a.jpg"));
        assert!(!is_valid_image_url("javascript:alert(1)"));
        assert!(!is_valid_image_url("/media/a.jpg"));
    }

    #[tokio::test]
    async fn add_defaults_title_and_alt() {
        let actions = actions();
        let result = actions.add(&input("", "https://cdn.example.com/a.jpg")).await;
        let photo = result.data.unwrap();
        assert_eq!(photo.title, "Untitled");
        assert_eq!(photo.alt, "Photo");

        let named = actions.add(&input("Dune", "https://cdn.example.com/d.jpg")).await;
        assert_eq!(named.data.unwrap().alt, "Dune");
    }

    #[tokio::test]
    async fn add_rejects_missing_or_bad_url() {
        let actions = actions();
        let missing = actions.add(&input("A", "  ")).await;
        assert_eq!(missing.error.as_deref(), Some("Image URL is required"));
        let bad = actions.add(&input("A", "ftp://x/y.jpg")).await;
        assert_eq!(bad.error.as_deref(), Some("Invalid image URL"));
    }

    #[tokio::test]
    async fn add_rejects_unknown_category() {
        let actions = actions();
        let mut form = input("A", "https://cdn.example.com/a.jpg");
        form.category = Some("Food".into());
        let result = actions.add(&form).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Invalid category"));
    }

    #[tokio::test]
    async fn positions_strictly_increase() {
        let actions = actions();
        let mut last = -1;
        for i in 0..4 {
            let photo = actions
                .add(&input(&format!("P{i}"), "https://cdn.example.com/a.jpg"))
                .await
                .data
                .unwrap();
            assert!(photo.position > last);
            last = photo.position;
        }
    }

    #[tokio::test]
    async fn update_requires_core_fields_and_keeps_others() {
        let actions = actions();
        let mut form = input("A", "https://cdn.example.com/a.jpg");
        form.frame_color = Some("oak".into());
        form.frame_thickness = Some("thin".into());
        let photo = actions.add(&form).await.data.unwrap();

        let missing = actions.update(photo.id, &input("B", "https://cdn.example.com/b.jpg")).await;
        assert_eq!(
            missing.error.as_deref(),
            Some("Title, alt text, and image URL are required")
        );

        let update = PhotoInput {
            title: Some("B".into()),
            alt: Some("b alt".into()),
            src: Some("https://cdn.example.com/b.jpg".into()),
            ..Default::default()
        };
        let updated = actions.update(photo.id, &update).await.data.unwrap();
        assert_eq!(updated.title, "B");
        assert_eq!(updated.category, Category::Landscape);
        assert_eq!(updated.frame_color, FrameColor::Oak);

        let gone = actions.update(999, &update).await;
        assert_eq!(gone.error.as_deref(), Some("Photo not found or update failed"));
    }

    #[tokio::test]
    async fn bulk_delete_counts_missing_ids_as_failures() {
        let actions = actions();
        let mut ids = Vec::new();
        for i in 0..3 {
            let photo = actions
                .add(&input(&format!("P{i}"), "https://cdn.example.com/a.jpg"))
                .await
                .data
                .unwrap();
            ids.push(photo.id);
        }
        ids.push(404);

        let result = actions.bulk_delete(&ids, true).await;
        assert_eq!(
            result.data,
            Some(BulkDeleteReport {
                deleted: 3,
                failed: 1
            })
        );
    }

    #[tokio::test]
    async fn bulk_delete_rejects_empty_and_all_failed() {
        let actions = actions();
        let empty = actions.bulk_delete(&[], false).await;
        assert_eq!(empty.error.as_deref(), Some("No photos selected"));
        let none = actions.bulk_delete(&[1, 2], false).await;
        assert_eq!(none.error.as_deref(), Some("Failed to delete any photos"));
    }

    #[tokio::test]
    async fn reorder_rejects_empty_list() {
        let result = actions().reorder(&[]).await;
        assert_eq!(result.error.as_deref(), Some("Invalid order data"));
    }
}
