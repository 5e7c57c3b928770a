use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::spot::models::Spot;
use crate::spot::ports::SpotServicePort;

pub async fn list_spots(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SpotData>>, ApiError> {
    state
        .spot_service
        .list_spots()
        .await
        .map_err(ApiError::from)
        .map(|spots| ApiSuccess::new(StatusCode::OK, spots.iter().map(SpotData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
}

impl From<&Spot> for SpotData {
    fn from(spot: &Spot) -> Self {
        Self {
            id: spot.id.0,
            name: spot.name.clone(),
            description: spot.description.clone(),
            latitude: spot.latitude,
            longitude: spot.longitude,
            image_url: spot.image_url.clone(),
        }
    }
}
