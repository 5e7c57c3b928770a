use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;

use super::AccessTokenData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// OAuth2 password-grant style login.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<ApiSuccess<AccessTokenData>, ApiError> {
    state
        .auth_service
        .login(&form.username, &form.password)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token.into()))
}

/// `application/x-www-form-urlencoded` login body.
///
/// Extra OAuth2 fields such as `grant_type` and `scope` are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}
