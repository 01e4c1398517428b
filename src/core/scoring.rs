use crate::core::factors::{
    budget_score, cultural_score, experience_score, location_score, reputation_score, BUDGET_MAX,
    CULTURAL_MAX, EXPERIENCE_MAX, LOCATION_MAX, REPUTATION_MAX,
};
use crate::error::{MatchError, Result};
use crate::models::{CandidateSummary, FactorScores, Requirement, ScoreBreakdown};

/// Bound on the external (qualitative) adjustment, in either direction
pub const MAX_EXTERNAL_BONUS: f64 = 10.0;

/// Upper bound of the final composite score
pub const FINAL_SCORE_MAX: f64 = 100.0;

/// Run every factor scorer for one candidate
///
/// Sub-scores and their scales:
///   cultural    0-30 (depends on importance tier)
///   budget      0-20
///   reputation  0-20
///   experience  0-10
///   location    0-10
pub fn calculate_factor_scores(
    requirement: &Requirement,
    candidate: &CandidateSummary,
) -> Result<FactorScores> {
    let cultural = cultural_score(
        &requirement.cultures,
        requirement.importance,
        &candidate.cultures,
    )?;

    let budget = requirement.budget.unwrap_or_default();
    let price = candidate.price_range.unwrap_or_default();
    let budget = budget_score(budget.min, budget.max, price.min, price.max, budget.flexibility)?;

    let reputation = reputation_score(candidate.average_rating, candidate.review_count)?;
    let experience = experience_score(candidate.years_experience);
    let location = location_score(requirement.location.as_ref(), candidate.service_area.as_ref())?;

    Ok(FactorScores {
        cultural,
        budget,
        reputation,
        experience,
        location,
    })
}

fn check_factor(factor: &'static str, value: f64, max: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(MatchError::InvalidFactorScore { factor, value, max })
    }
}

/// Combine sub-scores into a bounded composite (0-100)
///
/// Sub-scores are summed unweighted (max 90), the optional external bonus is
/// added, and the result is clamped. Out-of-range inputs are rejected rather
/// than clamped.
pub fn aggregate(scores: FactorScores, external_bonus: Option<f64>) -> Result<ScoreBreakdown> {
    let cultural = check_factor("cultural", scores.cultural, CULTURAL_MAX)?;
    let budget = check_factor("budget", scores.budget, BUDGET_MAX)?;
    let reputation = check_factor("reputation", scores.reputation, REPUTATION_MAX)?;
    let experience = check_factor("experience", scores.experience, EXPERIENCE_MAX)?;
    let location = check_factor("location", scores.location, LOCATION_MAX)?;

    if let Some(bonus) = external_bonus {
        if !bonus.is_finite() || bonus.abs() > MAX_EXTERNAL_BONUS {
            return Err(MatchError::InvalidBonus(bonus));
        }
    }

    let total_algorithmic = cultural + budget + reputation + experience + location;
    let final_score = (total_algorithmic + external_bonus.unwrap_or(0.0)).clamp(0.0, FINAL_SCORE_MAX);

    Ok(ScoreBreakdown {
        cultural,
        budget,
        reputation,
        experience,
        location,
        total_algorithmic,
        external_bonus,
        final_score,
    })
}
