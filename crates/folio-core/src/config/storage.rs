//! Blob storage and upload pipeline configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Blob provider to use: `"local"` or `"s3"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Key prefix under which gallery images are written.
    #[serde(default = "default_prefix")]
    pub key_prefix: String,
    /// Local filesystem provider settings.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// S3-compatible provider settings.
    #[serde(default)]
    pub s3: S3StorageConfig,
    /// Upload validation and resize settings.
    #[serde(default)]
    pub upload: UploadConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            key_prefix: default_prefix(),
            local: LocalStorageConfig::default(),
            s3: S3StorageConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}

/// Local filesystem storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Directory holding stored blobs.
    #[serde(default = "default_local_root")]
    pub root_path: String,
    /// Absolute URL prefix of `root_path`. The API serves the directory at
    /// this URL's path.
    #[serde(default = "default_public_base")]
    pub public_base_url: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
            public_base_url: default_public_base(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct S3StorageConfig {
    /// Endpoint URL for non-AWS services such as MinIO. Empty for AWS.
    #[serde(default)]
    pub endpoint: String,
    /// Region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Access key ID. Empty to use the default credential chain.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Public URL prefix for objects, e.g. a CDN domain.
    #[serde(default)]
    pub public_base_url: String,
    /// Use path-style addressing (required by most self-hosted services).
    #[serde(default)]
    pub force_path_style: bool,
}

/// Upload validation and image processing limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted upload in bytes.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Bounding box width for the stored image.
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    /// Bounding box height for the stored image.
    #[serde(default = "default_max_height")]
    pub max_height: u32,
    /// JPEG quality, 1-100.
    #[serde(default = "default_quality")]
    pub jpeg_quality: u8,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            max_width: default_max_width(),
            max_height: default_max_height(),
            jpeg_quality: default_quality(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_prefix() -> String {
    "gallery".to_string()
}

fn default_local_root() -> String {
    "./data/media".to_string()
}

fn default_public_base() -> String {
    "http://localhost:8080/media".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_max_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_max_width() -> u32 {
    2400
}

fn default_max_height() -> u32 {
    1600
}

fn default_quality() -> u8 {
    85
}
