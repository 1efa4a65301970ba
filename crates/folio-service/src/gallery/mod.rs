//! Gallery reads and writes with the degrade-on-failure policy.

pub mod service;
pub mod stats;

pub use service::{GalleryService, RELATED_LIMIT};
pub use stats::{CategoryCount, PhotoStats};
