//! Session verification behind a trait, so the demo verifier and the real
//! signed-token verifier are interchangeable from the routes' point of
//! view.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SessionError};

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "auth_token";

/// Sentinel accepted by the static demo verifier.
pub const DEMO_TOKEN: &str = "scene-demo-session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub name: String,
    pub role: String,
    pub exp: i64,
}

pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<UserClaims>;
}

/// Demo verifier: one fixed sentinel maps to one fixed user. Performs no
/// cryptography; only for local development and tests.
pub struct StaticTokenVerifier;

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Result<UserClaims> {
        if token == DEMO_TOKEN {
            Ok(UserClaims {
                sub: "demo-investor".to_string(),
                name: "Demo Investor".to_string(),
                role: "investor".to_string(),
                exp: chrono::Utc::now().timestamp() + 24 * 60 * 60,
            })
        } else {
            Err(SessionError::InvalidToken.into())
        }
    }
}

/// HS256 signed-token verifier with expiry enforcement.
pub struct JwtTokenVerifier {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No clock-skew allowance: a token is rejected the second it expires.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for the given claims. Used by tests and operator
    /// tooling; the service itself never mints sessions.
    pub fn issue(&self, claims: &UserClaims) -> Result<String> {
        encode(&Header::default(), claims, &self.encoding)
            .map_err(|err| SessionError::Signing(err.to_string()).into())
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<UserClaims> {
        decode::<UserClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                let session_err = match err.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        SessionError::ExpiredToken
                    }
                    _ => SessionError::InvalidToken,
                };
                session_err.into()
            })
    }
}
