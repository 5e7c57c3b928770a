use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::spot::errors::SpotError;
use crate::spot::models::Favorite;
use crate::spot::models::Rating;
use crate::spot::models::Spot;
use crate::spot::models::SpotId;
use crate::spot::ports::SpotRepository;

/// Process-local spot catalogue with favorites and ratings.
#[derive(Debug, Clone, Default)]
pub struct InMemorySpotRepository {
    spots: Arc<RwLock<BTreeMap<SpotId, Spot>>>,
    favorites: Arc<RwLock<Vec<Favorite>>>,
    ratings: Arc<RwLock<Vec<Rating>>>,
}

impl InMemorySpotRepository {
    pub fn new(spots: Vec<Spot>) -> Self {
        Self {
            spots: Arc::new(RwLock::new(
                spots.into_iter().map(|spot| (spot.id, spot)).collect(),
            )),
            favorites: Arc::default(),
            ratings: Arc::default(),
        }
    }

    /// Repository preloaded with the demo catalogue.
    pub fn seeded() -> Self {
        let now = Utc::now();

        Self::new(vec![
            Spot {
                id: SpotId(1),
                name: "Niagara Falls".to_string(),
                description: "Famous waterfall".to_string(),
                latitude: 43.0896,
                longitude: -79.0849,
                image_url: String::new(),
                created_at: now,
            },
            Spot {
                id: SpotId(2),
                name: "CN Tower".to_string(),
                description: "Iconic tower in Toronto".to_string(),
                latitude: 43.6426,
                longitude: -79.3871,
                image_url: String::new(),
                created_at: now,
            },
        ])
    }

    pub async fn favorites(&self) -> Vec<Favorite> {
        self.favorites.read().await.clone()
    }

    pub async fn ratings(&self) -> Vec<Rating> {
        self.ratings.read().await.clone()
    }
}

#[async_trait]
impl SpotRepository for InMemorySpotRepository {
    async fn list(&self) -> Result<Vec<Spot>, SpotError> {
        Ok(self.spots.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: SpotId) -> Result<Option<Spot>, SpotError> {
        Ok(self.spots.read().await.get(&id).cloned())
    }

    async fn add_favorite(&self, favorite: Favorite) -> Result<Favorite, SpotError> {
        self.favorites.write().await.push(favorite.clone());
        Ok(favorite)
    }

    async fn add_rating(&self, rating: Rating) -> Result<Rating, SpotError> {
        self.ratings.write().await.push(rating.clone());
        Ok(rating)
    }
}
