use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::account::models::Identity;
use crate::inbound::http::router::AppState;
use crate::spot::models::SpotId;
use crate::spot::ports::SpotServicePort;

pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    state
        .spot_service
        .add_favorite(&identity, SpotId(body.spot_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::CREATED, MessageData::new("Added to favorites")))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddFavoriteRequest {
    spot_id: i64,
}
