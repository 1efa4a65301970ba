//! Gallery photo entity and its styling enums.

pub mod category;
pub mod model;
pub mod slug;
pub mod style;

pub use category::Category;
pub use model::{NewPhoto, Photo, PhotoPatch};
pub use slug::title_to_slug;
pub use style::{FrameColor, FrameThickness, MatColor, MatThickness, Presentation};
