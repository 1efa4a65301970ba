//! Image upload service.
//!
//! Uploads are checked for type and size before anything is decoded or
//! written, normalized to a bounded JPEG, and stored under a generated
//! collision-resistant name.

use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use folio_core::config::UploadConfig;
use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_storage::{ImageProcessor, StorageManager};

/// MIME types accepted for upload.
pub const ALLOWED_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

const MAX_STEM_LEN: usize = 64;

/// One file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Original file name.
    pub file_name: String,
    /// Declared MIME type.
    pub content_type: String,
    /// Raw bytes.
    pub data: Bytes,
}

/// A stored upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedImage {
    /// Public URL of the stored JPEG.
    pub url: String,
    /// Storage key.
    pub key: String,
    /// Stored width.
    pub width: u32,
    /// Stored height.
    pub height: u32,
    /// Stored size in bytes.
    pub size: usize,
}

/// Per-file result of a batch upload.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Original file name.
    pub file_name: String,
    /// Whether the file was stored.
    pub success: bool,
    /// Public URL on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a batch upload.
#[derive(Debug, Clone, Serialize)]
pub struct BatchUploadReport {
    /// Outcomes in submission order.
    pub results: Vec<FileOutcome>,
    /// Files stored.
    pub succeeded: usize,
    /// Files rejected or failed.
    pub failed: usize,
}

/// Validates, normalizes, and stores uploaded images.
#[derive(Debug, Clone)]
pub struct UploadService {
    storage: StorageManager,
    processor: ImageProcessor,
    max_bytes: u64,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(storage: StorageManager, config: &UploadConfig) -> Self {
        Self {
            storage,
            processor: ImageProcessor::from_config(config),
            max_bytes: config.max_bytes,
        }
    }

    /// Largest accepted upload in bytes.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Check type and size without touching the bytes.
    pub fn validate(&self, file: &UploadFile) -> AppResult<()> {
        let content_type = file.content_type.trim().to_ascii_lowercase();
        if !ALLOWED_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::validation(
                "Invalid file type. Only JPEG, PNG, WebP, and GIF are allowed.",
            ));
        }
        if file.data.len() as u64 > self.max_bytes {
            return Err(AppError::validation(format!(
                "File too large. Maximum size is {}MB.",
                self.max_bytes / (1024 * 1024)
            )));
        }
        Ok(())
    }

    /// Upload one image and return where it is served.
    pub async fn upload(&self, file: UploadFile) -> AppResult<UploadedImage> {
        self.validate(&file)?;

        let original_size = file.data.len();
        let processed = self.processor.process(file.data).await?;
        let name = generated_name(&file.file_name);
        let key = self.storage.key_for(&name);
        let size = processed.bytes.len();
        let url = self.storage.put_jpeg(&name, processed.bytes).await?;

        info!(
            file_name = %file.file_name,
            key = %key,
            original_size,
            size,
            width = processed.width,
            height = processed.height,
            "Image uploaded"
        );

        Ok(UploadedImage {
            url,
            key,
            width: processed.width,
            height: processed.height,
            size,
        })
    }

    /// Upload files one after another, continuing past failures.
    pub async fn upload_batch(&self, files: Vec<UploadFile>) -> BatchUploadReport {
        let mut results = Vec::with_capacity(files.len());
        for file in files {
            let file_name = file.file_name.clone();
            let outcome = match self.upload(file).await {
                Ok(image) => FileOutcome {
                    file_name,
                    success: true,
                    url: Some(image.url),
                    error: None,
                },
                Err(e) => {
                    warn!(file_name = %file_name, error = %e, "Batch upload item failed");
                    FileOutcome {
                        file_name,
                        success: false,
                        url: None,
                        error: Some(e.message),
                    }
                }
            };
            results.push(outcome);
        }

        let succeeded = results.iter().filter(|r| r.success).count();
        let failed = results.len() - succeeded;
        info!(succeeded, failed, "Batch upload finished");
        BatchUploadReport {
            results,
            succeeded,
            failed,
        }
    }
}

/// `{stem}-{unix millis}-{8 hex}.jpg` for an original file name.
pub fn generated_name(original: &str) -> String {
    format!(
        "{}-{}-{:08x}.jpg",
        file_stem(original),
        Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}

/// ASCII-safe stem of `original` without its extension.
fn file_stem(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
    let stem = match base.rfind('.') {
        Some(dot) if dot > 0 => &base[..dot],
        _ => base,
    };

    let mut out = String::with_capacity(stem.len());
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    let out: String = out.trim_matches('-').chars().take(MAX_STEM_LEN).collect();
    let out = out.trim_end_matches('-');
    if out.is_empty() { "image".to_string() } else { out.to_string() }
}
