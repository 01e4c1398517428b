use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::core::{
    fairness::{FairnessAdjuster, FairnessInput, FairnessPolicy},
    filters::{is_eligible, shared_tags},
    ranker::{rank, ScoredCandidate},
    scoring::{aggregate, calculate_factor_scores},
};
use crate::error::Result;
use crate::models::{CandidateSummary, RankedMatch, Requirement, ScoreBreakdown};

/// Default number of matches returned
pub const DEFAULT_LIMIT: usize = 20;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Per-request knobs for a matching run
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// External adjustment per candidate id, in [-10, 10]
    pub bonuses: HashMap<String, f64>,
    pub exclude_ids: Vec<String>,
    pub limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            bonuses: HashMap::new(),
            exclude_ids: Vec::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Eligibility filtering (category, availability, exclusions)
/// 2. Factor scoring, in parallel across candidates
/// 3. Aggregation into a bounded composite
/// 4. Fairness adjustment
/// 5. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    adjuster: FairnessAdjuster,
    min_score: f64,
}

impl Matcher {
    pub fn new(policy: FairnessPolicy) -> Result<Self> {
        Ok(Self {
            adjuster: FairnessAdjuster::new(policy)?,
            min_score: 0.0,
        })
    }

    /// Drop candidates whose final score falls below `min_score`
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_default_policy() -> Self {
        Self {
            adjuster: FairnessAdjuster::default(),
            min_score: 0.0,
        }
    }

    pub fn policy(&self) -> &FairnessPolicy {
        self.adjuster.policy()
    }

    /// Rank candidates for a requirement
    ///
    /// # Arguments
    /// * `requirement` - What the couple is looking for
    /// * `candidates` - Candidate providers supplied by the data layer
    /// * `options` - External bonuses, exclusions and result limit
    ///
    /// # Returns
    /// MatchResult with ranked matches, or the error of an invalid candidate
    pub fn find_matches(
        &self,
        requirement: &Requirement,
        candidates: Vec<CandidateSummary>,
        options: &MatchOptions,
    ) -> Result<MatchResult> {
        let total_candidates = candidates.len();

        // Stage 1: Eligibility
        let eligible: Vec<CandidateSummary> = candidates
            .into_iter()
            .filter(|candidate| is_eligible(candidate, requirement, &options.exclude_ids))
            .collect();
        let eligible_candidates = eligible.len();

        debug!(
            "{} of {} candidates eligible for category {}",
            eligible_candidates, total_candidates, requirement.service_category
        );

        // Stages 2 & 3: Score and aggregate
        let breakdowns: Vec<ScoreBreakdown> = eligible
            .par_iter()
            .map(|candidate| {
                let bonus = options.bonuses.get(&candidate.id).copied();
                calculate_factor_scores(requirement, candidate)
                    .and_then(|factors| aggregate(factors, bonus))
                    .map_err(|e| e.for_candidate(&candidate.id))
            })
            .collect::<Result<Vec<_>>>()?;

        // Stage 4: Fairness
        let inputs: Vec<FairnessInput> = eligible
            .iter()
            .zip(&breakdowns)
            .map(|(candidate, breakdown)| FairnessInput {
                score: breakdown.final_score,
                impressions: candidate.impression_count,
            })
            .collect();
        let outcomes = self.adjuster.adjust(&inputs);

        let scored: Vec<ScoredCandidate> = eligible
            .into_iter()
            .zip(breakdowns)
            .zip(outcomes)
            .filter(|((_, breakdown), _)| breakdown.final_score >= self.min_score)
            .map(|((candidate, breakdown), outcome)| ScoredCandidate {
                shared_tags: shared_tags(&candidate, requirement),
                fairness_applied: self.adjuster.is_discounted(candidate.impression_count),
                candidate,
                breakdown,
                adjusted_score: outcome.adjusted_score,
            })
            .collect();

        // Stage 5: Rank and limit
        let mut matches = rank(scored);
        matches.truncate(options.limit);

        info!(
            "Ranked {} matches (from {} eligible of {} candidates)",
            matches.len(),
            eligible_candidates,
            total_candidates
        );

        Ok(MatchResult {
            matches,
            total_candidates,
            eligible_candidates,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
