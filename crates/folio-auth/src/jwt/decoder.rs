//! JWT token validation and revocation checking.

use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use folio_cache::keys;
use folio_cache::provider::CacheManager;
use folio_core::config::AuthConfig;
use folio_core::error::AppError;
use folio_core::traits::CacheProvider;

use super::claims::Claims;

/// Validates admin tokens and checks revocation status.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Cache holding revoked token ids.
    cache: CacheManager,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, cache: CacheManager) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            cache,
        }
    }

    /// Decodes and validates a token.
    ///
    /// Checks the signature, expiration, admin role, and that the token
    /// has not been revoked by a logout.
    pub async fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if !claims.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }

        self.check_revoked(&claims.jti).await?;
        Ok(claims)
    }

    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    async fn check_revoked(&self, jti: &str) -> Result<(), AppError> {
        let revoked = self
            .cache
            .exists(&keys::revoked_token(jti))
            .await
            .unwrap_or(false);
        if revoked {
            return Err(AppError::authentication("Token has been revoked"));
        }
        Ok(())
    }

    /// Revokes a token until it would have expired anyway.
    pub async fn revoke(&self, claims: &Claims) -> Result<(), AppError> {
        let ttl = match claims.remaining_ttl_seconds() {
            0 => Duration::from_secs(60),
            secs => Duration::from_secs(secs),
        };
        self.cache
            .set(&keys::revoked_token(&claims.jti), "revoked", ttl)
            .await
            .map_err(|e| AppError::internal(format!("Failed to revoke token: {e}")))?;
        tracing::info!(sub = %claims.sub, jti = %claims.jti, "Token revoked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use folio_core::ErrorKind;
    use folio_core::config::CacheConfig;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    fn decoder(secret: &str) -> JwtDecoder {
        JwtDecoder::new(&config(secret), CacheManager::new(&CacheConfig::default()))
    }

    #[tokio::test]
    async fn issued_token_decodes() {
        let issued = JwtEncoder::new(&config("k1")).issue("admin").unwrap();
        let claims = decoder("k1").decode(&issued.token).await.unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.is_admin());
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let issued = JwtEncoder::new(&config("k1")).issue("admin").unwrap();
        let err = decoder("other").decode(&issued.token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() {
        let decoder = decoder("k1");
        let issued = JwtEncoder::new(&config("k1")).issue("admin").unwrap();
        let claims = decoder.decode(&issued.token).await.unwrap();

        decoder.revoke(&claims).await.unwrap();

        let err = decoder.decode(&issued.token).await.unwrap_err();
        assert_eq!(err.message, "Token has been revoked");
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let err = decoder("k1").decode("not.a.jwt").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
