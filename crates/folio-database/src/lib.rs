//! # folio-database
//!
//! The [`PhotoStore`] trait over the `gallery_photos` table, its PostgreSQL
//! implementation ([`repositories::photo::PhotoRepository`]), a process-local
//! [`memory::MemoryPhotoStore`], connection management, migrations, and the
//! sample gallery used for seeding.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod store;

use std::sync::Arc;

use folio_core::config::{DatabaseBackend, DatabaseConfig};
use folio_core::result::AppResult;

pub use connection::DatabasePool;
pub use memory::MemoryPhotoStore;
pub use repositories::photo::PhotoRepository;
pub use store::PhotoStore;

/// Open the configured photo store, running migrations for PostgreSQL.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn PhotoStore>> {
    match config.backend {
        DatabaseBackend::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            migration::run_migrations(pool.pool()).await?;
            Ok(Arc::new(PhotoRepository::new(pool.into_pool())))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory photo store; changes are lost on restart");
            Ok(Arc::new(MemoryPhotoStore::new()))
        }
    }
}
