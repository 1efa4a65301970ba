//! Mat ("passepartout") and frame styling.
//!
//! Each photo carries an independent mat colour/thickness and frame
//! colour/thickness. They only influence presentation: the viewer wraps the
//! image in a mat of some padding and a frame of some border width.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use folio_core::AppError;

macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            /// No styling.
            #[default]
            None,
            $(
                #[doc = $text]
                $variant,
            )+
        }

        impl $name {
            /// Return the stored name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::None => "none",
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    "" | "none" => Ok(Self::None),
                    $($text => Ok(Self::$variant),)+
                    _ => Err(AppError::validation(format!(
                        concat!("Invalid ", stringify!($name), ": '{}'"),
                        s
                    ))),
                }
            }
        }
    };
}

style_enum! {
    /// Mat colour.
    MatColor { White => "white", Cream => "cream", Black => "black", Gray => "gray" }
}

style_enum! {
    /// Mat thickness.
    MatThickness { Thin => "thin", Medium => "medium", Thick => "thick" }
}

style_enum! {
    /// Frame colour or material.
    FrameColor {
        Black => "black",
        White => "white",
        Oak => "oak",
        Walnut => "walnut",
        Silver => "silver",
        Gold => "gold",
    }
}

style_enum! {
    /// Frame thickness.
    FrameThickness { Thin => "thin", Medium => "medium", Thick => "thick" }
}

impl MatColor {
    /// CSS colour, `None` when no mat is drawn.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::White => Some("#ffffff"),
            Self::Cream => Some("#f5f0e6"),
            Self::Black => Some("#111111"),
            Self::Gray => Some("#8a8a8a"),
        }
    }
}

impl MatThickness {
    /// Padding in CSS pixels at full size.
    pub fn padding_px(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Thin => 16,
            Self::Medium => 32,
            Self::Thick => 56,
        }
    }
}

impl FrameColor {
    /// CSS colour, `None` when no frame is drawn.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Black => Some("#1a1a1a"),
            Self::White => Some("#f8f8f8"),
            Self::Oak => Some("#b08850"),
            Self::Walnut => Some("#5a3b22"),
            Self::Silver => Some("#c0c0c0"),
            Self::Gold => Some("#c9a44c"),
        }
    }
}

impl FrameThickness {
    /// Border width in CSS pixels at full size.
    pub fn border_px(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Thin => 4,
            Self::Medium => 10,
            Self::Thick => 18,
        }
    }
}

/// Computed mat padding and frame border for one photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Presentation {
    /// Mat padding in pixels; 0 when there is no mat.
    pub mat_padding_px: u32,
    /// Mat colour.
    pub mat_color: Option<&'static str>,
    /// Frame border width in pixels; 0 when there is no frame.
    pub frame_border_px: u32,
    /// Frame colour.
    pub frame_color: Option<&'static str>,
}

impl Presentation {
    /// Compute the presentation for a mat/frame combination.
    ///
    /// A mat or frame is drawn only when both its colour and thickness are
    /// set.
    pub fn compute(
        mat_color: MatColor,
        mat_thickness: MatThickness,
        frame_color: FrameColor,
        frame_thickness: FrameThickness,
    ) -> Self {
        let (mat_padding_px, mat_color) = match mat_color.css() {
            Some(css) if mat_thickness != MatThickness::None => {
                (mat_thickness.padding_px(), Some(css))
            }
            _ => (0, None),
        };
        let (frame_border_px, frame_color) = match frame_color.css() {
            Some(css) if frame_thickness != FrameThickness::None => {
                (frame_thickness.border_px(), Some(css))
            }
            _ => (0, None),
        };
        Self {
            mat_padding_px,
            mat_color,
            frame_border_px,
            frame_color,
        }
    }

    /// Total extra space added on each side of the image.
    pub fn inset_px(&self) -> u32 {
        self.mat_padding_px + self.frame_border_px
    }

    /// Scale for a smaller rendering (grid thumbnails), rounding to whole
    /// pixels but never collapsing a visible mat or frame to zero.
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |px: u32| -> u32 {
            if px == 0 {
                0
            } else {
                ((px as f32 * factor).round() as u32).max(1)
            }
        };
        Self {
            mat_padding_px: scale(self.mat_padding_px),
            frame_border_px: scale(self.frame_border_px),
            ..*self
        }
    }
}
