//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use folio_core::error::AppError;

/// Default page size for the public gallery.
pub const DEFAULT_PAGE_LIMIT: usize = 20;
/// Largest page size a client may ask for.
pub const MAX_PAGE_LIMIT: usize = 100;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Query for the public gallery listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryQuery {
    /// Items to skip.
    #[serde(default)]
    pub offset: Option<usize>,
    /// Page size (default 20, max 100).
    #[serde(default)]
    pub limit: Option<usize>,
    /// Category filter.
    #[serde(default)]
    pub category: Option<String>,
}

impl GalleryQuery {
    /// Offset and clamped limit.
    pub fn window(&self) -> (usize, usize) {
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT);
        (self.offset.unwrap_or(0), limit)
    }
}

/// Query carrying an optional locale.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleQuery {
    /// `en` or `he`.
    #[serde(default)]
    pub locale: Option<String>,
}

/// Query for photo deletion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteQuery {
    /// Hard delete instead of hiding.
    #[serde(default)]
    pub permanent: bool,
}

/// Body for the visibility toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct VisibilityRequest {
    /// Whether the photo should be hidden.
    pub hidden: bool,
}

/// Body for reordering.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    /// Photo ids, top first.
    #[serde(alias = "order")]
    pub ids: Vec<i32>,
}

/// Body for bulk deletion.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkDeleteRequest {
    /// Photo ids.
    pub ids: Vec<i32>,
    /// Hard delete instead of hiding.
    #[serde(default)]
    pub permanent: bool,
}

/// Run `validator` rules and turn the first failure into a validation error.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|errors| AppError::validation(first_message(&errors)))
}

fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    for (field, errs) in fields {
        if let Some(e) = errs.first() {
            return e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
        }
    }
    "Invalid request".to_string()
}
