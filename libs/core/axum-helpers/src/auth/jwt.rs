use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Bearer token time-to-live: 72 hours
pub const TOKEN_TTL: i64 = 259_200;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: i64, // Subject (user id)
    pub exp: i64, // Expiration time
    pub iat: i64, // Issued at
}

/// Stateless JWT issuer and verifier.
///
/// Tokens are signed with a symmetric secret held as process-wide
/// configuration, loaded once at startup and never rotated during the
/// process lifetime.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!("JWT auth initialized");
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Issue a bearer token for the given user id.
    pub fn issue_token(&self, user_id: i64) -> eyre::Result<String> {
        self.create_token(user_id, TOKEN_TTL)
    }

    fn create_token(&self, user_id: i64, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id,
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify token signature and expiry, and decode claims.
    ///
    /// Only HS256 is accepted: a token whose header names any other
    /// algorithm fails verification regardless of its signature.
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}
