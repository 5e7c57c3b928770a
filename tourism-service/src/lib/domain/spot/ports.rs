use async_trait::async_trait;

use crate::account::models::Identity;
use crate::spot::errors::SpotError;
use crate::spot::models::Favorite;
use crate::spot::models::Rating;
use crate::spot::models::Score;
use crate::spot::models::Spot;
use crate::spot::models::SpotId;

/// Port for spot domain service operations.
///
/// Operations that record something on behalf of a user take the verified
/// `Identity` explicitly.
#[async_trait]
pub trait SpotServicePort: Send + Sync + 'static {
    /// List every spot, ordered by id.
    async fn list_spots(&self) -> Result<Vec<Spot>, SpotError>;

    /// Bookmark a spot for the caller.
    ///
    /// # Errors
    /// * `NotFound` - Spot does not exist
    async fn add_favorite(&self, identity: &Identity, spot_id: SpotId)
        -> Result<Favorite, SpotError>;

    /// Record the caller's score for a spot.
    ///
    /// # Errors
    /// * `NotFound` - Spot does not exist
    async fn add_rating(
        &self,
        identity: &Identity,
        spot_id: SpotId,
        score: Score,
    ) -> Result<Rating, SpotError>;
}

/// Persistence operations for spots, favorites and ratings.
#[async_trait]
pub trait SpotRepository: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Spot>, SpotError>;

    async fn find_by_id(&self, id: SpotId) -> Result<Option<Spot>, SpotError>;

    async fn add_favorite(&self, favorite: Favorite) -> Result<Favorite, SpotError>;

    async fn add_rating(&self, rating: Rating) -> Result<Rating, SpotError>;
}
