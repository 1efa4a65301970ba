//! Admin authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder secret shipped in `config/default.toml`.
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Shortest accepted HMAC signing secret, in bytes.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Admin credential and token configuration.
///
/// The site has a single administrator. The password is stored as an argon2
/// PHC string; generate one with `folio hash-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Admin login name.
    #[serde(default = "default_username")]
    pub admin_username: String,
    /// Argon2 PHC hash of the admin password. Empty disables login.
    #[serde(default)]
    pub admin_password_hash: String,
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Accept the placeholder or a short secret. Local development only.
    #[serde(default)]
    pub allow_insecure_secret: bool,
}

impl AuthConfig {
    /// Whether `jwt_secret` is empty, the shipped placeholder, or too short.
    pub fn has_weak_secret(&self) -> bool {
        self.jwt_secret.is_empty()
            || self.jwt_secret == DEFAULT_JWT_SECRET
            || self.jwt_secret.len() < MIN_JWT_SECRET_LEN
    }

    /// Refuse to sign tokens with a weak secret unless explicitly allowed.
    pub fn check_signing_secret(&self) -> Result<(), AppError> {
        if self.has_weak_secret() && !self.allow_insecure_secret {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be set to a random value of at least {MIN_JWT_SECRET_LEN} bytes"
            )));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: default_username(),
            admin_password_hash: String::new(),
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            allow_insecure_secret: false,
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    12
}
