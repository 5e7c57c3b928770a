use std::sync::Arc;
use std::sync::OnceLock;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::clock::Clock;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// One instance is built at startup from configuration and shared by every
/// request worker; it holds no mutable state besides a lazily computed decoy
/// hash.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    decoy_hash: OnceLock<String>,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator reading the system clock.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    pub fn new(token_secret: &[u8]) -> Self {
        Self::from_codec(TokenCodec::new(token_secret))
    }

    /// Create an authenticator whose tokens are timed by `clock`.
    pub fn with_clock(token_secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self::from_codec(TokenCodec::with_clock(token_secret, clock))
    }

    fn from_codec(token_codec: TokenCodec) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `Empty` - Password is empty
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check `password` against `stored_hash`.
    ///
    /// With no stored hash (unknown account) the password is still checked
    /// against a decoy so both outcomes cost one hash computation. The result
    /// is then always `false`.
    pub fn verify_password(&self, password: &str, stored_hash: Option<&str>) -> bool {
        match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                let decoy = self.decoy_hash.get_or_init(|| {
                    self.password_hasher
                        .hash("decoy-password-never-matches")
                        .unwrap_or_default()
                });
                let _ = self.password_hasher.verify(password, decoy);
                false
            }
        }
    }

    /// Verify credentials and sign `claims`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown account or wrong password
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: Option<&str>,
        claims: &Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_codec.encode(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Current time on the token clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.token_codec.now()
    }

    /// Claims for `subject` expiring `ttl` from now on this authenticator's
    /// clock.
    pub fn claims_for(&self, subject: &str, ttl: Duration) -> Claims {
        self.token_codec.claims_for(subject, ttl)
    }

    /// Sign claims without password verification.
    ///
    /// Used right after registration, where the credential was just created.
    pub fn generate_token(&self, claims: &Claims) -> Result<String, TokenError> {
        self.token_codec.encode(claims)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `Invalid` - Bad signature, malformed token or missing claim
    /// * `Expired` - Token is past its expiry
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_codec.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::clock::ManualClock;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let claims = authenticator.claims_for("alice", Duration::minutes(30));
        let result = authenticator
            .authenticate(password, Some(&hash), &claims)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, Some("alice".to_string()));
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");
        let claims = authenticator.claims_for("alice", Duration::minutes(30));

        let result = authenticator.authenticate("wrong_password", Some(&hash), &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_unknown_account() {
        let authenticator = Authenticator::new(SECRET);
        let claims = authenticator.claims_for("nobody", Duration::minutes(30));

        let result = authenticator.authenticate("anything", None, &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_password_without_hash_never_matches() {
        let authenticator = Authenticator::new(SECRET);

        assert!(!authenticator.verify_password("decoy-password-never-matches", None));
        assert!(!authenticator.verify_password("", None));
    }

    #[test]
    fn test_generate_and_validate_token_with_extra() {
        let authenticator = Authenticator::new(SECRET);

        let claims = authenticator
            .claims_for("alice", Duration::minutes(15))
            .with_extra("email", "a@x.com");
        let token = authenticator
            .generate_token(&claims)
            .expect("Failed to generate token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");
        assert_eq!(decoded.sub, Some("alice".to_string()));
        assert_eq!(decoded.email(), Some("a@x.com".to_string()));
    }

    #[test]
    fn test_validate_expired_token() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let authenticator = Authenticator::with_clock(SECRET, clock.clone());

        let claims = authenticator.claims_for("alice", Duration::minutes(30));
        let token = authenticator.generate_token(&claims).unwrap();

        clock.advance(Duration::minutes(45));

        assert_eq!(
            authenticator.validate_token(&token),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.validate_token("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
