//! Noces Algo - Matching and scoring engine for the Noces event marketplace
//!
//! This library ranks service providers against a couple's requirements.
//! Each candidate is scored on independent factors (cultural fit, budget,
//! reputation, experience, location), the sub-scores are aggregated into a
//! bounded composite, and a fairness stage discounts over-exposed providers
//! before the final ranking.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{FairnessPolicy, MatchOptions, MatchResult, Matcher};
pub use error::{MatchError, Result};
pub use models::{
    CandidateSummary, RankRequest, RankResponse, RankedMatch, Requirement, ScoreBreakdown,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        assert!(matcher.policy().enabled);
    }
}
