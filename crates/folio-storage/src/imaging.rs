//! Upload image normalization.
//!
//! Every accepted upload is decoded, scaled down to fit the configured
//! bounding box (never up), and re-encoded as a baseline JPEG. Decoding
//! and encoding are CPU-bound and run on the blocking pool.

use std::io::Cursor;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use tracing::debug;

use folio_core::config::UploadConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;

/// Result of normalizing one upload.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Encoded JPEG bytes.
    pub bytes: Bytes,
    /// Output width.
    pub width: u32,
    /// Output height.
    pub height: u32,
    /// Width of the decoded source.
    pub original_width: u32,
    /// Height of the decoded source.
    pub original_height: u32,
}

/// Resizes and re-encodes uploaded images.
#[derive(Debug, Clone, Copy)]
pub struct ImageProcessor {
    max_width: u32,
    max_height: u32,
    quality: u8,
}

impl ImageProcessor {
    /// Create a processor with an explicit bounding box and JPEG quality.
    pub fn new(max_width: u32, max_height: u32, quality: u8) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
            quality: quality.clamp(1, 100),
        }
    }

    /// Create a processor from upload settings.
    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(config.max_width, config.max_height, config.jpeg_quality)
    }

    /// Normalize `data` on the blocking pool.
    pub async fn process(&self, data: Bytes) -> AppResult<ProcessedImage> {
        let processor = *self;
        tokio::task::spawn_blocking(move || processor.process_sync(&data))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Image task panicked", e))?
    }

    /// Decode, fit inside the bounding box, and encode as JPEG.
    pub fn process_sync(&self, data: &[u8]) -> AppResult<ProcessedImage> {
        if data.is_empty() {
            return Err(AppError::validation("Empty image data"));
        }

        let img = image::load_from_memory(data)
            .map_err(|e| AppError::with_source(ErrorKind::Image, "Failed to decode image", e))?;
        let (original_width, original_height) = img.dimensions();

        let img = if original_width > self.max_width || original_height > self.max_height {
            img.resize(self.max_width, self.max_height, FilterType::Lanczos3)
        } else {
            img
        };

        // JPEG has no alpha channel.
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        let (width, height) = rgb.dimensions();

        let mut buf = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buf, self.quality);
        rgb.write_with_encoder(encoder)
            .map_err(|e| AppError::with_source(ErrorKind::Image, "Failed to encode JPEG", e))?;

        let bytes = Bytes::from(buf.into_inner());
        debug!(
            original_width,
            original_height,
            width,
            height,
            size = bytes.len(),
            "Processed image"
        );

        Ok(ProcessedImage {
            bytes,
            width,
            height,
            original_width,
            original_height,
        })
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}
