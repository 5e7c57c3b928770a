use axum::http::StatusCode;

use super::ApiSuccess;
use super::MessageData;

pub async fn welcome() -> ApiSuccess<MessageData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Welcome to Canada Tourism API backend!"),
    )
}
