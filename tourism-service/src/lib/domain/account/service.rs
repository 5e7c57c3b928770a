use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::AuthenticationResult;
use auth::Authenticator;
use auth::Claims;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::account::errors::AuthError;
use crate::account::models::AccessToken;
use crate::account::models::CredentialRecord;
use crate::account::models::Identity;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;
use crate::account::ports::AuthServicePort;
use crate::account::ports::CredentialStore;

/// Lifetime of a token issued at login.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;

/// Lifetime of the token handed out right after registration.
pub const DEFAULT_REGISTRATION_TTL_MINUTES: i64 = 15;

/// Domain service for registration, login and token verification.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
    session_ttl: Duration,
    registration_ttl: Duration,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `authenticator` - Process-wide hasher and token codec
    /// * `session_ttl` - Lifetime of login tokens
    /// * `registration_ttl` - Lifetime of the token issued on registration
    pub fn new(
        store: Arc<CS>,
        authenticator: Arc<Authenticator>,
        session_ttl: Duration,
        registration_ttl: Duration,
    ) -> Self {
        Self {
            store,
            authenticator,
            session_ttl,
            registration_ttl,
        }
    }

    /// Same as `new` with the default lifetimes.
    pub fn with_default_ttls(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self::new(
            store,
            authenticator,
            Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
            Duration::minutes(DEFAULT_REGISTRATION_TTL_MINUTES),
        )
    }

    fn claims_for(&self, record: &CredentialRecord, ttl: Duration) -> Claims {
        self.authenticator
            .claims_for(record.username.as_str(), ttl)
            .with_extra("email", record.email.as_str())
    }

    fn access_token(claims: &Claims, access_token: String) -> Result<AccessToken, AuthError> {
        let expires_at = claims
            .exp
            .and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0))
            .ok_or_else(|| AuthError::Internal("Token expiry out of range".to_string()))?;

        Ok(AccessToken {
            access_token,
            expires_at,
        })
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<AccessToken, AuthError> {
        let RegisterCommand {
            username,
            email,
            password,
        } = command;

        // Hashing is CPU-bound, run it on the blocking pool
        let authenticator = Arc::clone(&self.authenticator);
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| AuthError::Internal(format!("Hashing task failed: {}", e)))??;

        let record = CredentialRecord {
            username,
            email,
            password_hash,
            created_at: self.authenticator.now(),
        };

        let record = self.store.insert(record).await?;
        tracing::info!(username = %record.username, "Account registered");

        let claims = self.claims_for(&record, self.registration_ttl);
        let access_token = self.authenticator.generate_token(&claims)?;
        Self::access_token(&claims, access_token)
    }

    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        let Ok(username) = Username::new(username.to_string()) else {
            return Err(AuthError::InvalidCredentials);
        };

        let record = self.store.find(&username).await?;

        // Unknown accounts still get claims so both paths run the same work
        let claims = match &record {
            Some(record) => self.claims_for(record, self.session_ttl),
            None => self
                .authenticator
                .claims_for(username.as_str(), self.session_ttl),
        };

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = record.map(|r| r.password_hash);
        let password = password.to_string();
        let task_claims = claims.clone();
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, stored_hash.as_deref(), &task_claims)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))?;

        match result {
            Ok(AuthenticationResult { access_token }) => {
                tracing::info!(username = %username, "Login succeeded");
                Self::access_token(&claims, access_token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(username = %username, "Login rejected");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::TokenError(e)) => Err(e.into()),
        }
    }

    fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.authenticator.validate_token(token)?;

        let username = claims
            .sub
            .clone()
            .ok_or_else(|| AuthError::InvalidToken("missing subject".to_string()))?;

        Ok(Identity {
            username,
            email: claims.email().unwrap_or_default(),
        })
    }
}
