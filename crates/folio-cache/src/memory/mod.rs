//! moka-backed cache provider.

pub mod store;

pub use store::MemoryCacheProvider;
