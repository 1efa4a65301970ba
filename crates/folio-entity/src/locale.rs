//! Supported site locales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Site locale. Hebrew is the default and renders right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    En,
    /// Hebrew.
    #[default]
    He,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Self::En, Self::He];

    /// Language code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
        }
    }

    /// Whether text in this locale is laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::He)
    }

    /// Parse a locale, falling back to `default` for unknown codes.
    pub fn parse_or(code: Option<&str>, default: Locale) -> Locale {
        code.and_then(|c| c.parse().ok()).unwrap_or(default)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = folio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "he" => Ok(Self::He),
            _ => Err(folio_core::AppError::validation(format!(
                "Unsupported locale: '{s}'"
            ))),
        }
    }
}
