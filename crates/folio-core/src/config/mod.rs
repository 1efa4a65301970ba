//! Application configuration schemas.
//!
//! All configuration structs are deserialized through the `config` crate
//! from TOML files plus `FOLIO__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod cache;
pub mod contact;
pub mod database;
pub mod logging;
pub mod site;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, RateLimitConfig, ServerConfig};
pub use self::auth::{AuthConfig, DEFAULT_JWT_SECRET, MIN_JWT_SECRET_LEN};
pub use self::cache::CacheConfig;
pub use self::contact::ContactConfig;
pub use self::database::{DatabaseBackend, DatabaseConfig};
pub use self::logging::LoggingConfig;
pub use self::site::SiteConfig;
pub use self::storage::{LocalStorageConfig, S3StorageConfig, StorageConfig, UploadConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for `config/default.toml`, the
/// environment overlay, and environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Photo store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Blob storage and upload settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Admin credential and token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Contact form delivery settings.
    #[serde(default)]
    pub contact: ContactConfig,
    /// Public site identity.
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the named environment.
    ///
    /// Merges `config/default`, `config/{env}`, and environment variables
    /// of the form `FOLIO__SECTION__KEY`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
