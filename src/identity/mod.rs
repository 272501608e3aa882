//! Bearer-credential identity.
//!
//! Tokens are minted by an external issuer; this module only verifies them
//! and turns the claims into an [`Identity`].

pub mod extractor;
pub mod jwt;

pub use extractor::{AuthError, AuthenticatedUser};
pub use jwt::JwtIdentityResolver;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
}

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("invalid or expired token: {0}")]
    InvalidToken(String),

    #[error("token subject '{0}' is not a user id")]
    InvalidSubject(String),
}

/// Turns an opaque bearer token into the caller's identity.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<Identity, IdentityError>;
}
