//! Cache key builders for every Folio cache entry.

/// Prefix applied to all Folio cache keys.
const PREFIX: &str = "folio";

// ── Gallery keys ───────────────────────────────────────────

/// Public (visible-only) listing in display order.
pub fn public_gallery() -> String {
    format!("{PREFIX}:gallery:public")
}

/// Current hero photo.
pub fn hero_photo() -> String {
    format!("{PREFIX}:gallery:hero")
}

/// Pattern matching every gallery key.
pub fn gallery_pattern() -> String {
    format!("{PREFIX}:gallery:*")
}

// ── Auth keys ──────────────────────────────────────────────

/// Revoked token marker, keyed by JWT id.
pub fn revoked_token(jti: &str) -> String {
    format!("{PREFIX}:auth:revoked:{jti}")
}
