//! # folio-auth
//!
//! Authentication for the single Folio administrator.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `admin`: checks submitted credentials against the configured account
//! - `jwt`: token issuing, validation, and revocation on logout

pub mod admin;
pub mod jwt;
pub mod password;

pub use admin::AdminAuthenticator;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
