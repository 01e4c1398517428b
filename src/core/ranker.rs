use crate::core::factors::{BUDGET_MAX, CULTURAL_MAX, EXPERIENCE_MAX, LOCATION_MAX, REPUTATION_MAX};
use crate::models::{CandidateSummary, RankedMatch, ScoreBreakdown};

/// A second factor is named when its fill ratio is this close to the best one
const CO_DOMINANT_MARGIN: f64 = 0.1;

/// A scored, fairness-adjusted candidate waiting to be ranked
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: CandidateSummary,
    pub breakdown: ScoreBreakdown,
    pub adjusted_score: f64,
    pub fairness_applied: bool,
    pub shared_tags: Vec<String>,
}

/// Order candidates by adjusted score and assign 1-based ranks
///
/// Ties are broken by candidate id ascending so identical inputs always
/// produce identical rankings.
pub fn rank(mut candidates: Vec<ScoredCandidate>) -> Vec<RankedMatch> {
    candidates.sort_by(|a, b| {
        b.adjusted_score
            .partial_cmp(&a.adjusted_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.candidate.id.cmp(&b.candidate.id))
    });

    candidates
        .into_iter()
        .enumerate()
        .map(|(index, c)| {
            let explanation = explain(&c.breakdown, c.fairness_applied);
            RankedMatch {
                candidate: c.candidate,
                rank: index + 1,
                breakdown: c.breakdown,
                adjusted_score: c.adjusted_score,
                fairness_applied: c.fairness_applied,
                shared_tags: c.shared_tags,
                explanation,
            }
        })
        .collect()
}

/// Summarize the dominant contributing factor(s) of a breakdown
pub fn explain(breakdown: &ScoreBreakdown, fairness_applied: bool) -> String {
    let mut factors = [
        ("cultural fit", breakdown.cultural, CULTURAL_MAX),
        ("budget fit", breakdown.budget, BUDGET_MAX),
        ("reputation", breakdown.reputation, REPUTATION_MAX),
        ("experience", breakdown.experience, EXPERIENCE_MAX),
        ("location", breakdown.location, LOCATION_MAX),
    ];
    // Stable sort keeps declaration order among equal ratios
    factors.sort_by(|a, b| {
        (b.1 / b.2)
            .partial_cmp(&(a.1 / a.2))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let describe = |(label, value, max): (&str, f64, f64)| format!("{} ({:.0}/{:.0})", label, value, max);

    let (best, runner_up) = (factors[0], factors[1]);
    let best_ratio = best.1 / best.2;
    let runner_up_ratio = runner_up.1 / runner_up.2;

    let mut explanation = if best.1 <= 0.0 {
        "No strong matching factor".to_string()
    } else if runner_up.1 > 0.0 && best_ratio - runner_up_ratio <= CO_DOMINANT_MARGIN {
        format!("Strongest factors: {} and {}", describe(best), describe(runner_up))
    } else {
        format!("Strongest factor: {}", describe(best))
    };

    if let Some(bonus) = breakdown.external_bonus.filter(|b| *b != 0.0) {
        explanation.push_str(&format!("; qualitative adjustment {:+.1}", bonus));
    }
    if fairness_applied {
        explanation.push_str("; visibility adjusted for high recent exposure");
    }

    explanation
}
