use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::account::models::Identity;
use crate::spot::errors::SpotError;
use crate::spot::models::Favorite;
use crate::spot::models::Rating;
use crate::spot::models::Score;
use crate::spot::models::Spot;
use crate::spot::models::SpotId;
use crate::spot::ports::SpotRepository;
use crate::spot::ports::SpotServicePort;

/// Domain service implementation for spot operations.
pub struct SpotService<SR>
where
    SR: SpotRepository,
{
    repository: Arc<SR>,
}

impl<SR> SpotService<SR>
where
    SR: SpotRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }

    async fn require_spot(&self, spot_id: SpotId) -> Result<Spot, SpotError> {
        self.repository
            .find_by_id(spot_id)
            .await?
            .ok_or(SpotError::NotFound(spot_id.0))
    }
}

#[async_trait]
impl<SR> SpotServicePort for SpotService<SR>
where
    SR: SpotRepository,
{
    async fn list_spots(&self) -> Result<Vec<Spot>, SpotError> {
        self.repository.list().await
    }

    async fn add_favorite(
        &self,
        identity: &Identity,
        spot_id: SpotId,
    ) -> Result<Favorite, SpotError> {
        self.require_spot(spot_id).await?;

        let favorite = Favorite {
            username: identity.username.clone(),
            spot_id,
            created_at: Utc::now(),
        };

        let favorite = self.repository.add_favorite(favorite).await?;
        tracing::info!(username = %favorite.username, spot_id = %spot_id, "Favorite added");

        Ok(favorite)
    }

    async fn add_rating(
        &self,
        identity: &Identity,
        spot_id: SpotId,
        score: Score,
    ) -> Result<Rating, SpotError> {
        self.require_spot(spot_id).await?;

        let rating = Rating {
            username: identity.username.clone(),
            spot_id,
            score,
            created_at: Utc::now(),
        };

        let rating = self.repository.add_rating(rating).await?;
        tracing::info!(
            username = %rating.username,
            spot_id = %spot_id,
            score = rating.score.value(),
            "Rating submitted"
        );

        Ok(rating)
    }
}
