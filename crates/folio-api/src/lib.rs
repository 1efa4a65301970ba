//! # folio-api
//!
//! HTTP API layer for Folio built on Axum.
//!
//! Provides the public gallery, contact, auth, and admin endpoints,
//! middleware (rate limiting, CORS, compression, logging), the
//! [`AdminUser`](extractors::AdminUser) extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
