//! JWT claims structure used in admin tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role carried by every token this crate issues.
pub const ADMIN_ROLE: &str = "admin";

/// JWT claims payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the admin username.
    pub sub: String,
    /// Role at the time of issuance.
    pub role: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID, used for revocation.
    pub jti: String,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Whether the token carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
