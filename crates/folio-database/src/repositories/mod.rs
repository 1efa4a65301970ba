//! PostgreSQL repository implementations.

pub mod photo;
