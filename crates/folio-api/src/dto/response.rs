//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_entity::{Category, Locale, Photo, Presentation};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A photo with its slug and computed presentation.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoView {
    /// Stored photo.
    #[serde(flatten)]
    pub photo: Photo,
    /// URL slug.
    pub slug: String,
    /// Mat and frame sizes.
    pub presentation: Presentation,
}

impl From<Photo> for PhotoView {
    fn from(photo: Photo) -> Self {
        Self {
            slug: photo.slug(),
            presentation: photo.presentation(),
            photo,
        }
    }
}

/// Photo detail page data.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoDetail {
    /// The photo.
    pub photo: PhotoView,
    /// Other photos from the same category.
    pub related: Vec<PhotoView>,
}

/// A category with its localized label.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    /// Stored name.
    pub value: Category,
    /// Label in the requested locale.
    pub label: &'static str,
    /// Visible photos in this category.
    pub count: usize,
}

/// Category listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    /// Locale of the labels.
    pub locale: Locale,
    /// Whether the locale is right-to-left.
    pub rtl: bool,
    /// Categories in navigation order.
    pub categories: Vec<CategoryView>,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// `ok` when every dependency is healthy, otherwise `degraded`.
    pub status: String,
    /// Photo store status.
    pub database: String,
    /// Cache status.
    pub cache: String,
    /// Blob storage status.
    pub storage: String,
    /// Active blob storage provider.
    pub storage_provider: String,
}
