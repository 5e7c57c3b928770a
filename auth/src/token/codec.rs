use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// Issues and verifies signed, time-bounded session tokens.
///
/// Tokens are JWTs signed with HS256 under a process-wide secret. Nothing is
/// stored server-side: a token is valid from issuance until its `exp`, and
/// there is no revocation.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a codec reading the system clock.
    ///
    /// # Arguments
    /// * `secret` - Signing secret, loaded from configuration at startup
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Never derive it from request input
    pub fn new(secret: &[u8]) -> Self {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    /// Create a codec reading an injected clock.
    pub fn with_clock(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Claims for `subject` expiring `ttl` from now.
    pub fn claims_for(&self, subject: &str, ttl: Duration) -> Claims {
        Claims::for_subject(subject, self.clock.now(), ttl)
    }

    /// Issue a token for `subject` valid for `ttl`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.encode(&self.claims_for(subject, ttl))
    }

    /// Sign arbitrary claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// The signature and structure are checked before any claim is looked at,
    /// so a tampered token is always `Invalid`, never `Expired`.
    ///
    /// # Errors
    /// * `Invalid` - Malformed token, bad signature, or missing `sub`/`exp`
    /// * `Expired` - Valid signature but `now >= exp`
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against our own clock
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?
            .claims;

        match claims.sub.as_deref() {
            Some(sub) if !sub.is_empty() => {}
            _ => return Err(TokenError::Invalid("missing subject".to_string())),
        }

        if claims.exp.is_none() {
            return Err(TokenError::Invalid("missing expiration".to_string()));
        }

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
