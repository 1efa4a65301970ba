//! Public gallery viewer state: infinite-scroll paging, the lightbox, and
//! swipe gesture detection.

pub mod lightbox;
pub mod pager;
pub mod swipe;

use std::time::Duration;

pub use lightbox::{Lightbox, LightboxError};
pub use pager::{DEFAULT_BATCH_SIZE, GalleryPage, GalleryPager};
pub use swipe::{Swipe, SwipeTracker};

/// Length of the lightbox open, close, and navigate animations.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(300);
