use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Identity, IdentityError, IdentityResolver};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub exp: usize,  // Expiry timestamp
    pub iat: usize,  // Issued at timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Verifies HS256 bearer tokens issued elsewhere. This resolver never mints
/// tokens.
pub struct JwtIdentityResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityResolver {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 60; // Allow 60 seconds clock skew

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }
}

impl IdentityResolver for JwtIdentityResolver {
    fn resolve(&self, token: &str) -> Result<Identity, IdentityError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| IdentityError::InvalidToken(e.to_string()))?;

        let user_id = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| IdentityError::InvalidSubject(data.claims.sub.clone()))?;

        Ok(Identity {
            user_id,
            email: data.claims.email,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    pub(crate) fn token_for(secret: &str, sub: &str, lifetime: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: sub.to_string(),
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
            email: Some("reader@example.com".to_string()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_valid_token() {
        let resolver = JwtIdentityResolver::new("test-secret");
        let user_id = Uuid::new_v4();
        let token = token_for("test-secret", &user_id.to_string(), Duration::hours(1));

        let identity = resolver.resolve(&token).unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email.as_deref(), Some("reader@example.com"));
    }

    #[test]
    fn test_resolve_invalid_token() {
        let resolver = JwtIdentityResolver::new("test-secret");
        let result = resolver.resolve("invalid.token.here");
        assert!(matches!(result, Err(IdentityError::InvalidToken(_))));
    }

    #[test]
    fn test_resolve_wrong_secret() {
        let resolver = JwtIdentityResolver::new("secret-2");
        let token = token_for("secret-1", &Uuid::new_v4().to_string(), Duration::hours(1));
        assert!(resolver.resolve(&token).is_err());
    }

    #[test]
    fn test_resolve_expired_token() {
        let resolver = JwtIdentityResolver::new("test-secret");
        let token = token_for("test-secret", &Uuid::new_v4().to_string(), -Duration::hours(1));
        assert!(resolver.resolve(&token).is_err());
    }

    #[test]
    fn test_resolve_non_uuid_subject() {
        let resolver = JwtIdentityResolver::new("test-secret");
        let token = token_for("test-secret", "alice", Duration::hours(1));
        assert!(matches!(
            resolver.resolve(&token),
            Err(IdentityError::InvalidSubject(sub)) if sub == "alice"
        ));
    }
}
