//! Insert the sample gallery.

use std::time::Duration;

use folio_cache::{CacheManager, GalleryCache};
use folio_core::config::AppConfig;
use folio_database::seed::sample_photos;
use folio_service::GalleryService;

use crate::output;

/// Seed the configured store when it is empty.
pub async fn execute(config: AppConfig) -> anyhow::Result<()> {
    let store = folio_database::open_store(&config.database).await?;
    let cache = CacheManager::new(&config.cache);
    let gallery = GalleryService::new(
        store,
        GalleryCache::new(cache, Duration::from_secs(config.cache.gallery_ttl_seconds)),
    );

    let inserted = gallery.seed(&sample_photos()).await?;
    if inserted == 0 {
        output::print_warning("Store already has photos; nothing seeded.");
    } else {
        output::print_success(&format!("Seeded {inserted} sample photos."));
    }
    Ok(())
}
