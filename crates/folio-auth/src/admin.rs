//! Credential check for the configured administrator account.

use tracing::{info, warn};

use folio_core::config::AuthConfig;
use folio_core::error::AppError;

use crate::jwt::{IssuedToken, JwtEncoder};
use crate::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Verifies admin logins and issues tokens.
#[derive(Debug, Clone)]
pub struct AdminAuthenticator {
    username: String,
    password_hash: String,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
}

impl AdminAuthenticator {
    /// Create an authenticator for the configured account.
    pub fn new(config: &AuthConfig) -> Self {
        if config.admin_password_hash.is_empty() {
            warn!("auth.admin_password_hash is empty; admin login is disabled");
        }
        Self {
            username: config.admin_username.clone(),
            password_hash: config.admin_password_hash.clone(),
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(config),
        }
    }

    /// Check credentials and issue a token on success.
    ///
    /// The password is verified even when the username is wrong so both
    /// failures take the same time and produce the same message.
    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        if self.password_hash.is_empty() {
            return Err(AppError::service_unavailable("Admin login is not configured"));
        }

        let password_ok = self.hasher.verify_password(password, &self.password_hash)?;
        if !(password_ok && username == self.username) {
            warn!(username, "Rejected admin login");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let issued = self.encoder.issue(&self.username)?;
        info!(username, expires_at = %issued.expires_at, "Admin logged in");
        Ok(issued)
    }
}
