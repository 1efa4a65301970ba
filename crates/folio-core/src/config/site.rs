//! Public site identity, used for structured data and absolute links.

use serde::{Deserialize, Serialize};

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Photographer's name.
    #[serde(default = "default_author")]
    pub author: String,
    /// Canonical base URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Short description.
    #[serde(default = "default_description")]
    pub description: String,
    /// Locale used when a request does not name one (`"en"` or `"he"`).
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Profile links (Instagram, Facebook, ...).
    #[serde(default)]
    pub same_as: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            author: default_author(),
            base_url: default_base_url(),
            description: default_description(),
            default_locale: default_locale(),
            same_as: Vec::new(),
        }
    }
}

fn default_name() -> String {
    "Denis Pekerman Photography".to_string()
}

fn default_author() -> String {
    "Denis Pekerman".to_string()
}

fn default_base_url() -> String {
    "https://denispek.com".to_string()
}

fn default_description() -> String {
    "Architectural, interior and landscape photography".to_string()
}

fn default_locale() -> String {
    "he".to_string()
}
