use crate::error::{MatchError, Result};
use crate::models::Flexibility;

/// Maximum budget score
pub const BUDGET_MAX: f64 = 20.0;

/// The couple stated no budget: neither rewarded nor penalized
const NO_BUDGET_SCORE: f64 = 10.0;

/// The provider does not disclose pricing
const NO_PRICE_SCORE: f64 = 5.0;

/// Overlap ratio from which a partial overlap counts as a full match
const NEAR_FULL_OVERLAP: f64 = 0.9;

/// Best score reachable when the ranges do not overlap at all
const GAP_CEILING: f64 = 8.0;

/// Price gap, in currency units, at which the gap score has decayed by 1/e
fn gap_tolerance(flexibility: Flexibility) -> f64 {
    match flexibility {
        Flexibility::Strict => 500.0,
        Flexibility::SomewhatFlexible => 1000.0,
        Flexibility::Flexible => 2000.0,
    }
}

fn check_price(field: &'static str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(MatchError::InvalidPrice { field, value: v }),
        _ => Ok(value),
    }
}

fn check_range(side: &'static str, min: Option<f64>, max: Option<f64>) -> Result<()> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(MatchError::InvalidBudgetRange { side, min, max });
        }
    }
    Ok(())
}

/// Calculate the budget fit score (0-20)
///
/// A missing couple minimum is 0 and a missing couple maximum is open-ended.
/// A provider giving a single bound is treated as a fixed price.
///
/// - one range inside the other, or the provider midpoint inside: 20
/// - partial overlap: 10 + 10 x (overlap / couple range width), 20 when ≥ 90%
/// - no overlap: exponential decay of the absolute price gap, slower for
///   more flexible couples
pub fn budget_score(
    couple_min: Option<f64>,
    couple_max: Option<f64>,
    provider_min: Option<f64>,
    provider_max: Option<f64>,
    flexibility: Flexibility,
) -> Result<f64> {
    let couple_min = check_price("couple minimum", couple_min)?;
    let couple_max = check_price("couple maximum", couple_max)?;
    let provider_min = check_price("provider minimum", provider_min)?;
    let provider_max = check_price("provider maximum", provider_max)?;
    check_range("couple", couple_min, couple_max)?;
    check_range("provider", provider_min, provider_max)?;

    if couple_min.is_none() && couple_max.is_none() {
        return Ok(NO_BUDGET_SCORE);
    }

    let (p_lo, p_hi) = match (provider_min, provider_max) {
        (None, None) => return Ok(NO_PRICE_SCORE),
        (Some(lo), Some(hi)) => (lo, hi),
        (Some(price), None) | (None, Some(price)) => (price, price),
    };
    let c_lo = couple_min.unwrap_or(0.0);
    let c_hi = couple_max.unwrap_or(f64::INFINITY);

    let midpoint = (p_lo + p_hi) / 2.0;
    let contained = p_lo >= c_lo && p_hi <= c_hi;
    let covers = p_lo <= c_lo && p_hi >= c_hi;
    if contained || covers || (c_lo..=c_hi).contains(&midpoint) {
        return Ok(BUDGET_MAX);
    }

    let overlap = c_hi.min(p_hi) - c_lo.max(p_lo);
    if overlap > 0.0 {
        // An open-ended budget has no width; measure against the provider range instead
        let width = c_hi - c_lo;
        let ratio = if width.is_finite() {
            overlap / width
        } else {
            overlap / (p_hi - p_lo)
        };
        if ratio >= NEAR_FULL_OVERLAP {
            return Ok(BUDGET_MAX);
        }
        return Ok(NO_BUDGET_SCORE + (BUDGET_MAX - NO_BUDGET_SCORE) * ratio);
    }

    let gap = if p_lo >= c_hi { p_lo - c_hi } else { c_lo - p_hi };

    Ok(GAP_CEILING * (-gap / gap_tolerance(flexibility)).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_couple_budget_is_neutral() {
        let score = budget_score(None, None, Some(500.0), Some(1500.0), Flexibility::Flexible);
        assert_eq!(score.unwrap(), 10.0);
    }

    #[test]
    fn test_no_provider_price() {
        let score = budget_score(Some(500.0), Some(2000.0), None, None, Flexibility::Flexible);
        assert_eq!(score.unwrap(), 5.0);
    }

    #[test]
    fn test_contained_range_scores_max() {
        let inside = budget_score(
            Some(500.0),
            Some(2000.0),
            Some(800.0),
            Some(1500.0),
            Flexibility::Flexible,
        );
        assert_eq!(inside.unwrap(), 20.0);

        let midpoint_inside = budget_score(
            Some(500.0),
            Some(3000.0),
            Some(1000.0),
            Some(2000.0),
            Flexibility::Flexible,
        );
        assert_eq!(midpoint_inside.unwrap(), 20.0);
    }

    #[test]
    fn test_partial_overlap_beats_neutral() {
        let score = budget_score(
            Some(1000.0),
            Some(3000.0),
            Some(2000.0),
            Some(5000.0),
            Flexibility::Flexible,
        )
        .unwrap();
        assert!(score > 10.0 && score < 20.0, "got {}", score);
        assert_eq!(score, 15.0);
    }

    #[test]
    fn test_large_gap_strict_is_low() {
        let score = budget_score(
            Some(500.0),
            Some(1000.0),
            Some(5000.0),
            Some(10000.0),
            Flexibility::Strict,
        );
        assert!(score.unwrap() < 5.0);
    }

    #[test]
    fn test_gap_score_ignores_budget_size() {
        // 50 over a small budget must not score below 500 over a large one
        let small_gap = budget_score(
            Some(0.0),
            Some(100.0),
            Some(150.0),
            Some(200.0),
            Flexibility::Strict,
        )
        .unwrap();
        let large_gap = budget_score(
            Some(5000.0),
            Some(10000.0),
            Some(10500.0),
            Some(11000.0),
            Flexibility::Strict,
        )
        .unwrap();
        assert!(large_gap <= small_gap, "{} > {}", large_gap, small_gap);
    }

    #[test]
    fn test_flexible_never_below_strict() {
        for provider_min in [1100.0, 1300.0, 2000.0, 6000.0] {
            let strict = budget_score(
                Some(500.0),
                Some(1000.0),
                Some(provider_min),
                Some(provider_min * 2.0),
                Flexibility::Strict,
            )
            .unwrap();
            let flexible = budget_score(
                Some(500.0),
                Some(1000.0),
                Some(provider_min),
                Some(provider_min * 2.0),
                Flexibility::Flexible,
            )
            .unwrap();
            assert!(flexible >= strict);
        }
    }

    #[test]
    fn test_cheaper_provider_outside_range() {
        let score = budget_score(
            Some(3000.0),
            Some(5000.0),
            Some(1000.0),
            Some(2000.0),
            Flexibility::SomewhatFlexible,
        )
        .unwrap();
        assert!(score > 0.0 && score < NO_BUDGET_SCORE);
    }

    #[test]
    fn test_open_ended_budget() {
        // "at least 1000": anything above is fine
        let above = budget_score(Some(1000.0), None, Some(4000.0), Some(6000.0), Flexibility::Strict);
        assert_eq!(above.unwrap(), 20.0);

        // a single provider price is a fixed price
        let fixed = budget_score(None, Some(1500.0), Some(1200.0), None, Flexibility::Strict);
        assert_eq!(fixed.unwrap(), 20.0);
    }

    #[test]
    fn test_provider_range_covering_budget() {
        let score = budget_score(
            Some(1500.0),
            Some(1500.0),
            Some(500.0),
            Some(5000.0),
            Flexibility::Strict,
        );
        assert_eq!(score.unwrap(), 20.0);
    }

    #[test]
    fn test_invalid_prices_rejected() {
        let negative = budget_score(Some(-1.0), Some(100.0), Some(50.0), None, Flexibility::Strict);
        assert!(matches!(negative, Err(MatchError::InvalidPrice { .. })));

        let nan = budget_score(Some(100.0), None, Some(f64::NAN), None, Flexibility::Strict);
        assert!(matches!(nan, Err(MatchError::InvalidPrice { .. })));

        let inverted = budget_score(
            Some(100.0),
            Some(200.0),
            Some(900.0),
            Some(300.0),
            Flexibility::Strict,
        );
        assert!(matches!(inverted, Err(MatchError::InvalidBudgetRange { side: "provider", .. })));
    }
}
