//! Storage manager. Selects the configured provider and writes under the
//! gallery key prefix.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use folio_core::config::StorageConfig;
use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_core::traits::storage::StorageProvider;

use crate::providers::LocalStorageProvider;

/// Handle to the active blob provider.
#[derive(Debug, Clone)]
pub struct StorageManager {
    provider: Arc<dyn StorageProvider>,
    key_prefix: String,
}

impl StorageManager {
    /// Build the provider named by `config.provider`.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let provider: Arc<dyn StorageProvider> = match config.provider.as_str() {
            "local" => Arc::new(
                LocalStorageProvider::new(
                    &config.local.root_path,
                    &config.local.public_base_url,
                )
                .await?,
            ),
            #[cfg(feature = "s3")]
            "s3" => Arc::new(crate::providers::S3StorageProvider::new(&config.s3).await?),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: {other}"
                )));
            }
        };

        info!(
            provider = provider.provider_type(),
            prefix = %config.key_prefix,
            "Storage ready"
        );
        Ok(Self::new(provider, &config.key_prefix))
    }

    /// Wrap an existing provider.
    pub fn new(provider: Arc<dyn StorageProvider>, key_prefix: &str) -> Self {
        Self {
            provider,
            key_prefix: key_prefix.trim_matches('/').to_string(),
        }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &Arc<dyn StorageProvider> {
        &self.provider
    }

    /// Full key for a file name under the gallery prefix.
    pub fn key_for(&self, file_name: &str) -> String {
        if self.key_prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.key_prefix, file_name)
        }
    }

    /// Store a JPEG under the gallery prefix, returning its public URL.
    pub async fn put_jpeg(&self, file_name: &str, data: Bytes) -> AppResult<String> {
        self.provider
            .put(&self.key_for(file_name), data, "image/jpeg")
            .await
    }

    /// Provider health.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }
}
