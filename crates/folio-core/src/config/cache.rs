//! Cache configuration.

use serde::{Deserialize, Serialize};

/// In-memory cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries held.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Upper bound on any entry's lifetime in seconds.
    #[serde(default = "default_ttl")]
    pub default_ttl_seconds: u64,
    /// How long the public gallery listing stays cached.
    #[serde(default = "default_gallery_ttl")]
    pub gallery_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            default_ttl_seconds: default_ttl(),
            gallery_ttl_seconds: default_gallery_ttl(),
        }
    }
}

fn default_max_capacity() -> u64 {
    10_000
}

fn default_ttl() -> u64 {
    86_400
}

fn default_gallery_ttl() -> u64 {
    60
}
