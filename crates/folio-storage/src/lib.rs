//! # folio-storage
//!
//! Public blob storage for Folio. Supports the local filesystem (served by
//! the API under `/media`) and S3-compatible object stores, plus the image
//! pipeline that normalizes uploads into web-sized JPEGs.

pub mod imaging;
pub mod manager;
pub mod providers;

pub use imaging::{ImageProcessor, ProcessedImage};
pub use manager::StorageManager;
