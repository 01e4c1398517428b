use crate::error::{MatchError, Result};

/// Maximum reputation score
pub const REPUTATION_MAX: f64 = 20.0;

/// An unrated, unvetted provider
const NO_RATING_SCORE: f64 = 5.0;

/// Share of the score carried by the star rating itself
const RATING_POINTS: f64 = 16.0;

/// Share of the score earned through review volume
const VOLUME_POINTS: f64 = 4.0;

/// Review count at which ~63% of the volume bonus is earned
const VOLUME_SCALE: f64 = 10.0;

/// Calculate the reputation score (0-20)
///
/// A base component proportional to the rating, plus a saturating bonus
/// for review volume so that more reviews never lower the score.
pub fn reputation_score(average_rating: Option<f64>, review_count: Option<u32>) -> Result<f64> {
    let Some(rating) = average_rating else {
        return Ok(NO_RATING_SCORE);
    };
    if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
        return Err(MatchError::InvalidRating(rating));
    }

    let reviews = review_count.unwrap_or(0) as f64;
    let base = RATING_POINTS * rating / 5.0;
    let volume = VOLUME_POINTS * (1.0 - (-reviews / VOLUME_SCALE).exp());

    Ok(base + volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rating_is_neutral() {
        assert_eq!(reputation_score(None, None).unwrap(), 5.0);
        assert_eq!(reputation_score(None, Some(40)).unwrap(), 5.0);
    }

    #[test]
    fn test_top_rating_with_volume() {
        assert!(reputation_score(Some(5.0), Some(10)).unwrap() > 15.0);
    }

    #[test]
    fn test_mid_rating_limited_volume() {
        let score = reputation_score(Some(3.0), Some(5)).unwrap();
        assert!(score > 5.0 && score < 16.0, "got {}", score);
    }

    #[test]
    fn test_more_reviews_never_lower() {
        let few = reputation_score(Some(4.0), Some(2)).unwrap();
        let many = reputation_score(Some(4.0), Some(20)).unwrap();
        assert!(many >= few);
    }

    #[test]
    fn test_bounded() {
        let score = reputation_score(Some(5.0), Some(u32::MAX)).unwrap();
        assert!(score <= REPUTATION_MAX);
    }

    #[test]
    fn test_invalid_rating_rejected() {
        assert_eq!(
            reputation_score(Some(5.5), Some(3)),
            Err(MatchError::InvalidRating(5.5))
        );
        assert!(reputation_score(Some(-0.1), None).is_err());
        assert!(reputation_score(Some(f64::NAN), None).is_err());
    }
}
