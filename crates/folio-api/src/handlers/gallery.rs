//! Public gallery handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use folio_core::error::AppError;
use folio_entity::{Category, Locale};
use folio_service::GalleryPage;
use folio_service::gallery::RELATED_LIMIT;

use crate::dto::request::{GalleryQuery, LocaleQuery};
use crate::dto::response::{
    ApiResponse, CategoriesResponse, CategoryView, PhotoDetail, PhotoView,
};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/gallery?offset=&limit=&category=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<ApiResponse<GalleryPage<PhotoView>>>, ApiError> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<Category>()?),
    };
    let (offset, limit) = query.window();

    let photos: Vec<PhotoView> = state
        .gallery
        .public_photos()
        .await
        .into_iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .map(PhotoView::from)
        .collect();

    Ok(Json(ApiResponse::ok(GalleryPage::slice(&photos, offset, limit))))
}

/// GET /api/gallery/hero
pub async fn hero(State(state): State<AppState>) -> Json<ApiResponse<Option<PhotoView>>> {
    Json(ApiResponse::ok(state.gallery.hero().await.map(PhotoView::from)))
}

/// GET /api/gallery/photos/{slug}
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<PhotoDetail>>, ApiError> {
    let photo = state
        .gallery
        .by_slug(&slug)
        .await
        .ok_or_else(|| AppError::not_found(format!("Photo '{slug}' not found")))?;
    let related = state
        .gallery
        .related(&photo, RELATED_LIMIT)
        .await
        .into_iter()
        .map(PhotoView::from)
        .collect();

    Ok(Json(ApiResponse::ok(PhotoDetail {
        photo: PhotoView::from(photo),
        related,
    })))
}

/// GET /api/gallery/categories?locale=
pub async fn categories(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Json<ApiResponse<CategoriesResponse>> {
    let default = Locale::parse_or(Some(&state.config.site.default_locale), Locale::default());
    let locale = Locale::parse_or(query.locale.as_deref(), default);
    let photos = state.gallery.public_photos().await;

    let categories = Category::ALL
        .iter()
        .map(|&category| CategoryView {
            value: category,
            label: category.label(locale),
            count: photos.iter().filter(|p| p.category == category).count(),
        })
        .collect();

    Json(ApiResponse::ok(CategoriesResponse {
        locale,
        rtl: locale.is_rtl(),
        categories,
    }))
}
