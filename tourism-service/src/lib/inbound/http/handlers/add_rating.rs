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
use crate::spot::errors::SpotError;
use crate::spot::models::Score;
use crate::spot::models::SpotId;
use crate::spot::ports::SpotServicePort;

pub async fn add_rating(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<AddRatingRequest>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let score = Score::new(body.rating).map_err(SpotError::from)?;

    state
        .spot_service
        .add_rating(&identity, SpotId(body.spot_id), score)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::CREATED, MessageData::new("Rating submitted")))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddRatingRequest {
    spot_id: i64,
    rating: f64,
}
