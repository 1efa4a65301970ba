//! # folio-core
//!
//! Core crate for Folio. Contains the configuration schema, provider traits
//! for caches and blob stores, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Folio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
