//! Photo repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::warn;

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_entity::photo::{Category, NewPhoto, Photo, PhotoPatch};

use crate::store::{PhotoStore, position_for};

const COLUMNS: &str = "id, title, alt, category, src, position, hidden, hero_eligible, \
     passepartout_color, passepartout_thickness, frame_color, frame_thickness, \
     created_at, updated_at";

/// Raw `gallery_photos` row. Enum columns are stored as text.
#[derive(Debug, Clone, FromRow)]
struct PhotoRow {
    id: i32,
    title: String,
    alt: String,
    category: String,
    src: String,
    position: i32,
    hidden: bool,
    hero_eligible: bool,
    passepartout_color: String,
    passepartout_thickness: String,
    frame_color: String,
    frame_thickness: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PhotoRow> for Photo {
    type Error = AppError;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        let category: Category = row.category.parse().map_err(|e: AppError| {
            AppError::database(format!("Photo {} has bad category: {}", row.id, e.message))
        })?;
        Ok(Photo {
            id: row.id,
            title: row.title,
            alt: row.alt,
            category,
            src: row.src,
            position: row.position,
            hidden: row.hidden,
            hero_eligible: row.hero_eligible,
            passepartout_color: lenient(row.id, &row.passepartout_color),
            passepartout_thickness: lenient(row.id, &row.passepartout_thickness),
            frame_color: lenient(row.id, &row.frame_color),
            frame_thickness: lenient(row.id, &row.frame_thickness),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Parse a styling column, treating unknown values as `none`.
fn lenient<T>(id: i32, raw: &str) -> T
where
    T: std::str::FromStr + Default,
{
    raw.parse().unwrap_or_else(|_| {
        warn!(photo_id = id, value = raw, "Unknown style value, rendering as none");
        T::default()
    })
}

fn db_err(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

fn into_photos(rows: Vec<PhotoRow>) -> AppResult<Vec<Photo>> {
    rows.into_iter().map(Photo::try_from).collect()
}

/// Repository for `gallery_photos` on PostgreSQL.
#[derive(Debug, Clone)]
pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    /// Create a new photo repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoStore for PhotoRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, include_hidden: bool) -> AppResult<Vec<Photo>> {
        let sql = if include_hidden {
            format!("SELECT {COLUMNS} FROM gallery_photos ORDER BY position DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM gallery_photos WHERE hidden = false \
                 ORDER BY position DESC, id DESC"
            )
        };
        let rows = sqlx::query_as::<_, PhotoRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list photos"))?;
        into_photos(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Photo>> {
        let sql = format!("SELECT {COLUMNS} FROM gallery_photos WHERE id = $1");
        sqlx::query_as::<_, PhotoRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find photo"))?
            .map(Photo::try_from)
            .transpose()
    }

    async fn find_hero(&self) -> AppResult<Option<Photo>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM gallery_photos \
             WHERE hero_eligible = true AND hidden = false \
             ORDER BY position DESC, id DESC LIMIT 1"
        );
        sqlx::query_as::<_, PhotoRow>(&sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find hero photo"))?
            .map(Photo::try_from)
            .transpose()
    }

    async fn insert(&self, photo: &NewPhoto) -> AppResult<Photo> {
        let sql = format!(
            "INSERT INTO gallery_photos \
               (title, alt, category, src, position, hidden, hero_eligible, \
                passepartout_color, passepartout_thickness, frame_color, frame_thickness) \
             VALUES ($1, $2, $3, $4, \
               (SELECT COALESCE(MAX(position), -1) + 1 FROM gallery_photos), \
               $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PhotoRow>(&sql)
            .bind(&photo.title)
            .bind(&photo.alt)
            .bind(photo.category.as_str())
            .bind(&photo.src)
            .bind(photo.hidden)
            .bind(photo.hero_eligible)
            .bind(photo.passepartout_color.as_str())
            .bind(photo.passepartout_thickness.as_str())
            .bind(photo.frame_color.as_str())
            .bind(photo.frame_thickness.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to insert photo"))?;
        Photo::try_from(row)
    }

    async fn update(&self, id: i32, patch: &PhotoPatch) -> AppResult<Option<Photo>> {
        let sql = format!(
            "UPDATE gallery_photos SET \
               title = COALESCE($2, title), \
               alt = COALESCE($3, alt), \
               category = COALESCE($4, category), \
               src = COALESCE($5, src), \
               hidden = COALESCE($6, hidden), \
               hero_eligible = COALESCE($7, hero_eligible), \
               passepartout_color = COALESCE($8, passepartout_color), \
               passepartout_thickness = COALESCE($9, passepartout_thickness), \
               frame_color = COALESCE($10, frame_color), \
               frame_thickness = COALESCE($11, frame_thickness), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoRow>(&sql)
            .bind(id)
            .bind(patch.title.as_deref())
            .bind(patch.alt.as_deref())
            .bind(patch.category.map(|c| c.as_str()))
            .bind(patch.src.as_deref())
            .bind(patch.hidden)
            .bind(patch.hero_eligible)
            .bind(patch.passepartout_color.map(|v| v.as_str()))
            .bind(patch.passepartout_thickness.map(|v| v.as_str()))
            .bind(patch.frame_color.map(|v| v.as_str()))
            .bind(patch.frame_thickness.map(|v| v.as_str()))
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to update photo"))?
            .map(Photo::try_from)
            .transpose()
    }

    async fn hide(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE gallery_photos SET hidden = true, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to hide photo"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM gallery_photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete photo"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn reorder(&self, ids: &[i32]) -> AppResult<u64> {
        let mut updated = 0;
        for (index, id) in ids.iter().enumerate() {
            let result = sqlx::query(
                "UPDATE gallery_photos SET position = $1, updated_at = NOW() WHERE id = $2",
            )
            .bind(position_for(index, ids.len()))
            .bind(*id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to reorder photos"))?;
            updated += result.rows_affected();
        }
        Ok(updated)
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gallery_photos")
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count photos"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(db_err("Database health check failed"))
    }
}
