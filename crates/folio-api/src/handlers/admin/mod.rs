//! Admin-only handlers. Every handler takes an [`AdminUser`](crate::extractors::AdminUser).

pub mod photos;
pub mod upload;
