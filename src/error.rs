use thiserror::Error;

/// Errors raised by the matching engine
///
/// Missing optional data is never an error; these variants cover corrupt
/// inputs that indicate an upstream defect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid culture identifier: {0:?}")]
    InvalidCulture(String),

    #[error("Invalid {field} price: {value}")]
    InvalidPrice { field: &'static str, value: f64 },

    #[error("Invalid {side} budget range: min {min} > max {max}")]
    InvalidBudgetRange { side: &'static str, min: f64, max: f64 },

    #[error("Invalid rating {0}: expected a value in [0, 5]")]
    InvalidRating(f64),

    #[error("Invalid coordinates: lat {lat}, lon {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("Invalid travel radius: {0} km")]
    InvalidRadius(f64),

    #[error("Invalid {factor} score {value}: expected a value in [0, {max}]")]
    InvalidFactorScore {
        factor: &'static str,
        value: f64,
        max: f64,
    },

    #[error("Invalid external bonus {0}: expected a value in [-10, 10]")]
    InvalidBonus(f64),

    #[error("Invalid fairness policy: {0}")]
    InvalidFairnessPolicy(String),

    #[error("Candidate {id}: {source}")]
    InvalidCandidate {
        id: String,
        #[source]
        source: Box<MatchError>,
    },
}

impl MatchError {
    /// Attach the offending candidate's id to a scoring error
    pub fn for_candidate(self, id: &str) -> Self {
        MatchError::InvalidCandidate {
            id: id.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_error_message() {
        let err = MatchError::InvalidRating(7.5).for_candidate("dj-42");
        assert_eq!(
            err.to_string(),
            "Candidate dj-42: Invalid rating 7.5: expected a value in [0, 5]"
        );
    }
}
