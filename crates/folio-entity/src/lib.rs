//! # folio-entity
//!
//! Domain entity models for Folio. The gallery has a single persisted
//! entity, [`photo::Photo`]; everything else here is a value object used to
//! create, patch, label, or present it.

pub mod locale;
pub mod photo;

pub use locale::Locale;
pub use photo::{
    Category, FrameColor, FrameThickness, MatColor, MatThickness, NewPhoto, Photo, PhotoPatch,
    Presentation, title_to_slug,
};
