//! Photo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::slug::title_to_slug;
use super::style::{FrameColor, FrameThickness, MatColor, MatThickness, Presentation};

/// A photo in the gallery (`gallery_photos` row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Identifier assigned by the store.
    pub id: i32,
    /// Title.
    pub title: String,
    /// Alt text.
    pub alt: String,
    /// Category.
    pub category: Category,
    /// Public image URL.
    pub src: String,
    /// Sort key; higher values are shown first.
    pub position: i32,
    /// Soft-deleted: excluded from public listings.
    pub hidden: bool,
    /// Candidate for the homepage background.
    pub hero_eligible: bool,
    /// Mat colour.
    pub passepartout_color: MatColor,
    /// Mat thickness.
    pub passepartout_thickness: MatThickness,
    /// Frame colour.
    pub frame_color: FrameColor,
    /// Frame thickness.
    pub frame_thickness: FrameThickness,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

impl Photo {
    /// URL slug derived from the title.
    pub fn slug(&self) -> String {
        title_to_slug(&self.title)
    }

    /// Mat and frame presentation for the viewer.
    pub fn presentation(&self) -> Presentation {
        Presentation::compute(
            self.passepartout_color,
            self.passepartout_thickness,
            self.frame_color,
            self.frame_thickness,
        )
    }

    /// Whether this photo appears in public listings.
    pub fn is_public(&self) -> bool {
        !self.hidden
    }

    /// Display order comparator: `position DESC, id DESC`.
    pub fn display_order(a: &Photo, b: &Photo) -> std::cmp::Ordering {
        b.position.cmp(&a.position).then(b.id.cmp(&a.id))
    }
}

/// Data required to create a photo. Position is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPhoto {
    /// Title.
    pub title: String,
    /// Alt text.
    pub alt: String,
    /// Category.
    pub category: Category,
    /// Public image URL.
    pub src: String,
    /// Start hidden.
    #[serde(default)]
    pub hidden: bool,
    /// Candidate for the homepage background.
    #[serde(default)]
    pub hero_eligible: bool,
    /// Mat colour.
    #[serde(default)]
    pub passepartout_color: MatColor,
    /// Mat thickness.
    #[serde(default)]
    pub passepartout_thickness: MatThickness,
    /// Frame colour.
    #[serde(default)]
    pub frame_color: FrameColor,
    /// Frame thickness.
    #[serde(default)]
    pub frame_thickness: FrameThickness,
}

impl NewPhoto {
    /// Create a visible, unstyled photo.
    pub fn new(
        title: impl Into<String>,
        alt: impl Into<String>,
        category: Category,
        src: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            alt: alt.into(),
            category,
            src: src.into(),
            hidden: false,
            hero_eligible: false,
            passepartout_color: MatColor::None,
            passepartout_thickness: MatThickness::None,
            frame_color: FrameColor::None,
            frame_thickness: FrameThickness::None,
        }
    }

    /// Mark as a hero candidate.
    pub fn hero(mut self) -> Self {
        self.hero_eligible = true;
        self
    }
}

/// Partial update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoPatch {
    /// Title.
    pub title: Option<String>,
    /// Alt text.
    pub alt: Option<String>,
    /// Category.
    pub category: Option<Category>,
    /// Public image URL.
    pub src: Option<String>,
    /// Visibility.
    pub hidden: Option<bool>,
    /// Hero candidacy.
    pub hero_eligible: Option<bool>,
    /// Mat colour.
    pub passepartout_color: Option<MatColor>,
    /// Mat thickness.
    pub passepartout_thickness: Option<MatThickness>,
    /// Frame colour.
    pub frame_color: Option<FrameColor>,
    /// Frame thickness.
    pub frame_thickness: Option<FrameThickness>,
}

impl PhotoPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the patch to a photo in place.
    pub fn apply_to(&self, photo: &mut Photo) {
        if let Some(title) = &self.title {
            photo.title = title.clone();
        }
        if let Some(alt) = &self.alt {
            photo.alt = alt.clone();
        }
        if let Some(category) = self.category {
            photo.category = category;
        }
        if let Some(src) = &self.src {
            photo.src = src.clone();
        }
        if let Some(hidden) = self.hidden {
            photo.hidden = hidden;
        }
        if let Some(hero) = self.hero_eligible {
            photo.hero_eligible = hero;
        }
        if let Some(color) = self.passepartout_color {
            photo.passepartout_color = color;
        }
        if let Some(thickness) = self.passepartout_thickness {
            photo.passepartout_thickness = thickness;
        }
        if let Some(color) = self.frame_color {
            photo.frame_color = color;
        }
        if let Some(thickness) = self.frame_thickness {
            photo.frame_thickness = thickness;
        }
    }
}
