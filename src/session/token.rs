use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::types::SessionClaims;
use crate::shared::AppError;

/// Checks HS256 session tokens issued with the shared session secret
pub struct SessionValidator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionValidator {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issues a token for `subject`; used for local development and tests
    #[instrument(skip(self))]
    pub fn create_token(&self, subject: &str, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: subject.to_string(),
            email: None,
            exp: (now + ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            debug!(error = %e, "Failed to encode session token");
            AppError::Unauthorized(e.to_string())
        })
    }

    /// Validates a session token and returns the claims if valid
    #[instrument(skip(self, token))]
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| {
                debug!(subject = %data.claims.sub, exp = data.claims.exp, "Session token accepted");
                data.claims
            })
            .map_err(|e| {
                debug!(error = %e, "Session token rejected");
                AppError::Unauthorized(e.to_string())
            })
    }
}
