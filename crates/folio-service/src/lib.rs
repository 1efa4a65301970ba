//! # folio-service
//!
//! Business logic service layer for Folio. Each service orchestrates the
//! photo store, the gallery cache, blob storage, and outbound email to
//! implement application-level use cases.
//!
//! Services take their dependencies at construction time as `Arc`s or
//! cheap clones.
//!
//! The `admin::panel` and `viewer` modules hold pure client-side state
//! with no I/O for the admin management screen and the public lightbox.

pub mod admin;
pub mod contact;
pub mod gallery;
pub mod structured_data;
pub mod upload;
pub mod viewer;

pub use admin::{ActionResult, AdminPanel, PhotoActions};
pub use contact::{ContactService, EmailSender, LogOnlySender, ResendSender};
pub use gallery::{GalleryService, PhotoStats};
pub use upload::UploadService;
pub use viewer::{GalleryPage, GalleryPager, Lightbox, Swipe, SwipeTracker};
