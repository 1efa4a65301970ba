//! # folio-cache
//!
//! In-process caching for Folio, built on
//! [moka](https://crates.io/crates/moka):
//!
//! - [`memory::MemoryCacheProvider`]: string cache with per-entry TTL
//! - [`CacheManager`]: the shared handle the rest of the app holds
//! - [`GalleryCache`]: time-boxed cache of the public listing, invalidated
//!   on every write

pub mod gallery;
pub mod keys;
pub mod memory;
pub mod provider;

pub use gallery::GalleryCache;
pub use provider::CacheManager;
