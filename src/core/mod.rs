// Core algorithm exports
pub mod distance;
pub mod factors;
pub mod fairness;
pub mod filters;
pub mod matcher;
pub mod ranker;
pub mod scoring;

pub use distance::haversine_distance;
pub use fairness::{FairnessAdjuster, FairnessInput, FairnessOutcome, FairnessPolicy};
pub use filters::{is_eligible, shared_tags};
pub use matcher::{MatchOptions, MatchResult, Matcher};
pub use ranker::{explain, rank, ScoredCandidate};
pub use scoring::{aggregate, calculate_factor_scores};
