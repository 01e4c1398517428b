use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Exposure-fairness configuration
///
/// Loaded once and validated at construction; the adjuster never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairnessPolicy {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Blend factor between the raw and the discounted score, in (0, 1)
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Floor of the fairness multiplier, in (0, 1]
    #[serde(default = "default_min_fairness_score")]
    pub min_fairness_score: f64,
    /// Impressions above which a candidate starts being discounted
    #[serde(default = "default_impression_threshold")]
    pub impression_threshold: u64,
}

fn default_enabled() -> bool { true }
fn default_weight() -> f64 { 0.3 }
fn default_min_fairness_score() -> f64 { 0.1 }
fn default_impression_threshold() -> u64 { 100 }

impl Default for FairnessPolicy {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            weight: default_weight(),
            min_fairness_score: default_min_fairness_score(),
            impression_threshold: default_impression_threshold(),
        }
    }
}

impl FairnessPolicy {
    /// A policy that leaves every score untouched
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.weight > 0.0 && self.weight < 1.0) {
            return Err(MatchError::InvalidFairnessPolicy(format!(
                "weight must be in (0, 1), got {}",
                self.weight
            )));
        }
        if !(self.min_fairness_score > 0.0 && self.min_fairness_score <= 1.0) {
            return Err(MatchError::InvalidFairnessPolicy(format!(
                "min_fairness_score must be in (0, 1], got {}",
                self.min_fairness_score
            )));
        }
        if self.impression_threshold == 0 {
            return Err(MatchError::InvalidFairnessPolicy(
                "impression_threshold must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Score and recent exposure of one candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FairnessInput {
    pub score: f64,
    pub impressions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FairnessOutcome {
    pub score: f64,
    pub adjusted_score: f64,
}

/// Discounts over-exposed candidates so a few providers cannot capture all traffic
#[derive(Debug, Clone)]
pub struct FairnessAdjuster {
    policy: FairnessPolicy,
}

impl Default for FairnessAdjuster {
    fn default() -> Self {
        Self {
            policy: FairnessPolicy::default(),
        }
    }
}

impl FairnessAdjuster {
    pub fn new(policy: FairnessPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &FairnessPolicy {
        &self.policy
    }

    /// Fairness multiplier in [min_fairness_score, 1]
    ///
    /// 1 up to the threshold, then `threshold / impressions`, floored.
    #[inline]
    pub fn multiplier(&self, impressions: u64) -> f64 {
        let threshold = self.policy.impression_threshold;
        if impressions <= threshold {
            return 1.0;
        }
        (threshold as f64 / impressions as f64).max(self.policy.min_fairness_score)
    }

    /// Adjusted score of a single candidate
    #[inline]
    pub fn adjust_score(&self, score: f64, impressions: u64) -> f64 {
        if !self.is_discounted(impressions) {
            return score;
        }
        let weight = self.policy.weight;
        score * (1.0 - weight) + score * self.multiplier(impressions) * weight
    }

    /// Whether this candidate's score is discounted at all
    pub fn is_discounted(&self, impressions: u64) -> bool {
        self.policy.enabled && impressions > self.policy.impression_threshold
    }

    pub fn adjust(&self, candidates: &[FairnessInput]) -> Vec<FairnessOutcome> {
        candidates
            .iter()
            .map(|c| FairnessOutcome {
                score: c.score,
                adjusted_score: self.adjust_score(c.score, c.impressions),
            })
            .collect()
    }
}
