//! Database migration command.

use anyhow::bail;

use folio_core::config::{AppConfig, DatabaseBackend};
use folio_database::DatabasePool;

use crate::output;

/// Apply pending migrations to the configured PostgreSQL database.
pub async fn execute(config: AppConfig) -> anyhow::Result<()> {
    if config.database.backend != DatabaseBackend::Postgres {
        bail!("Migrations only apply to the postgres backend");
    }

    let pool = DatabasePool::connect(&config.database).await?;
    println!("Running database migrations...");
    folio_database::migration::run_migrations(pool.pool()).await?;
    output::print_success("All migrations applied successfully.");
    Ok(())
}
