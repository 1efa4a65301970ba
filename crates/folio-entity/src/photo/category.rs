//! Photo category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::locale::Locale;

/// The fixed set of gallery categories.
///
/// Stored and serialized by display name (`"Landscape"`), parsed
/// case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Landscapes.
    Landscape,
    /// Portraits.
    Portrait,
    /// Urban and architecture.
    Urban,
    /// Nature.
    Nature,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Category; 4] = [
        Self::Landscape,
        Self::Portrait,
        Self::Urban,
        Self::Nature,
    ];

    /// Return the stored name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "Landscape",
            Self::Portrait => "Portrait",
            Self::Urban => "Urban",
            Self::Nature => "Nature",
        }
    }

    /// Navigation label in the given locale.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Landscape, Locale::En) => "Landscape",
            (Self::Portrait, Locale::En) => "Portrait",
            (Self::Urban, Locale::En) => "Urban",
            (Self::Nature, Locale::En) => "Nature",
            (Self::Landscape, Locale::He) => "נוף",
            (Self::Portrait, Locale::He) => "פורטרט",
            (Self::Urban, Locale::He) => "אורבני",
            (Self::Nature, Locale::He) => "טבע",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = folio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "landscape" => Ok(Self::Landscape),
            "portrait" => Ok(Self::Portrait),
            "urban" => Ok(Self::Urban),
            "nature" => Ok(Self::Nature),
            _ => Err(folio_core::AppError::validation(format!(
                "Invalid category: '{s}'. Expected one of: Landscape, Portrait, Urban, Nature"
            ))),
        }
    }
}
