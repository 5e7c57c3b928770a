use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::AccessTokenData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AuthError;
use crate::account::models::EmailAddress;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;
use crate::account::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<AccessTokenData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::CREATED, token.into()))
}

/// HTTP request body for registering an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, AuthError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterCommand::new(username, email, self.password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_dotted_username_parses() {
        let command = request("john.doe", "j@x.com").try_into_command().unwrap();
        assert_eq!(command.username.as_str(), "john.doe");
    }

    #[test]
    fn test_valid_request_parses() {
        let command = request("alice", "a@x.com").try_into_command().unwrap();
        assert_eq!(command.username.as_str(), "alice");
        assert_eq!(command.email.as_str(), "a@x.com");
        assert_eq!(command.password, "secret123");
    }

    #[test]
    fn test_invalid_request_is_bad_request() {
        let err = request("", "a@x.com").try_into_command().unwrap_err();
        assert!(matches!(err, AuthError::InvalidUsername(_)));
        assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));

        let err = request("alice", "").try_into_command().unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
        assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));
    }
}
