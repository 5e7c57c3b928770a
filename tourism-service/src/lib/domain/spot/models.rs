use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::spot::errors::RatingError;

/// Point of interest identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpotId(pub i64);

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// A user's bookmark on a spot.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub username: String,
    pub spot_id: SpotId,
    pub created_at: DateTime<Utc>,
}

/// Rating score value type
///
/// Finite and within 0 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score(f64);

impl Score {
    const MIN: f64 = 0.0;
    const MAX: f64 = 5.0;

    /// # Errors
    /// * `OutOfRange` - Not finite, or outside 0..=5
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// A user's score for a spot.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub username: String,
    pub spot_id: SpotId,
    pub score: Score,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert_eq!(Score::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::new(4.5).unwrap().value(), 4.5);
        assert_eq!(Score::new(5.0).unwrap().value(), 5.0);
    }

    #[test]
    fn test_score_out_of_range() {
        assert!(Score::new(-0.1).is_err());
        assert!(Score::new(5.5).is_err());
        assert!(Score::new(f64::NAN).is_err());
        assert!(Score::new(f64::INFINITY).is_err());
    }
}
