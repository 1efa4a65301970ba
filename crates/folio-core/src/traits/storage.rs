//! Blob storage trait for pluggable object stores.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for public blob storage backends.
///
/// Keys are slash-separated relative paths such as
/// `gallery/sunrise-1700000000000-a1b2c3d4.jpg`. Every stored object is
/// publicly readable at [`StorageProvider::public_url`].
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store `data` under `key` with the given content type and return its
    /// public URL.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<String>;

    /// Read an object into memory.
    async fn read_bytes(&self, key: &str) -> AppResult<Bytes>;

    /// Delete an object. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether an object exists.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Public URL for `key`.
    fn public_url(&self, key: &str) -> String;
}
