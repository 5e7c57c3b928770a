use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::models::AccessToken;
use crate::account::models::CredentialRecord;
use crate::account::models::Identity;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;

/// Port for the authentication entry points used by request handlers.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create a credential and issue a first token.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Bearer token for the new account
    ///
    /// # Errors
    /// * `InvalidPassword` - Password is empty
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Internal` - Hashing or token signing failed
    async fn register(&self, command: RegisterCommand) -> Result<AccessToken, AuthError>;

    /// Verify a username/password pair and issue a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (never distinguished)
    /// * `Internal` - Token signing failed
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Verify a bearer token and return the identity it was issued to.
    ///
    /// Purely token-based: the credential store is not consulted.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed or tampered token
    /// * `ExpiredToken` - Token is past its expiry
    fn authenticate(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Credential persistence.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Insert a new credential record.
    ///
    /// The presence check and the insert form one atomic step, so two
    /// concurrent inserts of the same username cannot both succeed.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - A record with this username exists; it is left unchanged
    async fn insert(&self, record: CredentialRecord) -> Result<CredentialRecord, AuthError>;

    /// Look up a credential record by username.
    ///
    /// # Returns
    /// Optional record (None if not found)
    async fn find(&self, username: &Username) -> Result<Option<CredentialRecord>, AuthError>;
}
