use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::account::errors::EmailError;
use crate::account::errors::UsernameError;

/// Authenticated caller, reconstructed from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub email: String,
}

/// Stored credential for one account.
///
/// Owned by the credential store; at most one per username.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Username value type
///
/// Any non-empty string. Uniqueness is enforced by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// # Errors
    /// * `Empty` - Username is the empty string
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Contact email, stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// # Errors
    /// * `Empty` - Email is the empty string
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.is_empty() {
            return Err(EmailError::Empty);
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account with validated fields
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterCommand {
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (hashed by the service)
    pub fn new(username: Username, email: EmailAddress, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Bearer token handed out by register and login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub const TOKEN_TYPE: &'static str = "bearer";

    pub fn as_str(&self) -> &str {
        &self.access_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_any_non_empty_string() {
        for name in ["alice", "john.doe", "alice@x.com", "alice smith", "名前"] {
            let username = Username::new(name.to_string()).unwrap();
            assert_eq!(username.as_str(), name);
        }

        let long = "a".repeat(200);
        assert_eq!(Username::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_username_empty() {
        assert_eq!(Username::new(String::new()), Err(UsernameError::Empty));
    }

    #[test]
    fn test_email_stored_as_given() {
        let email = EmailAddress::new("a@x.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "a@x.com");

        let email = EmailAddress::new("bob-at-home".to_string()).unwrap();
        assert_eq!(email.as_str(), "bob-at-home");
    }

    #[test]
    fn test_email_empty() {
        assert_eq!(EmailAddress::new(String::new()), Err(EmailError::Empty));
    }
}
