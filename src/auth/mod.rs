pub mod password;
pub mod users;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

pub use password::{hash_password, verify_password};
pub use users::UserStore;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Not authenticated")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("Invalid username: {0}")]
    InvalidUsername(&'static str),

    #[error("Invalid password: {0}")]
    InvalidPassword(&'static str),

    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(sub: impl Into<String>, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: sub.into(),
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Body returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Issues and verifies HS256 access tokens with a fixed lifetime.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    const ALGORITHM: Algorithm = Algorithm::HS256;

    pub fn new(secret: &str, lifetime: Duration) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, AuthError> {
        Self::new(&security.jwt_secret, Duration::minutes(security.jwt_expiry_minutes))
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn issue(&self, username: &str) -> Result<AccessToken, AuthError> {
        let claims = Claims::new(username, self.lifetime);
        let token = encode(&Header::new(Self::ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))?;

        Ok(AccessToken {
            access_token: token,
            token_type: "bearer".to_string(),
            expires_in: self.lifetime.num_seconds(),
        })
    }

    /// Check signature and expiry. Every failure collapses into `InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Self::ALGORITHM);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            AuthError::InvalidToken
        })?;

        if token_data.claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidToken);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::minutes(30)).unwrap()
    }

    #[test]
    fn issued_token_verifies_with_subject() {
        let tokens = service();
        let issued = tokens.issue("alice").unwrap();
        assert_eq!(issued.token_type, "bearer");
        assert_eq!(issued.expires_in, 30 * 60);

        let claims = tokens.verify(&issued.access_token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(
            TokenService::new("", Duration::minutes(30)),
            Err(AuthError::MissingSecret)
        ));
    }

    #[test]
    fn expired_token_is_invalid() {
        let expired = TokenService::new("test-secret", Duration::minutes(-5)).unwrap();
        let issued = expired.issue("alice").unwrap();
        assert!(matches!(service().verify(&issued.access_token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let other = TokenService::new("other-secret", Duration::minutes(30)).unwrap();
        let issued = other.issue("alice").unwrap();
        assert!(matches!(service().verify(&issued.access_token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        assert!(matches!(service().verify("invalidtoken"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn token_with_blank_subject_is_invalid() {
        let tokens = service();
        let issued = tokens.issue("  ").unwrap();
        assert!(matches!(tokens.verify(&issued.access_token), Err(AuthError::InvalidToken)));
    }
}
