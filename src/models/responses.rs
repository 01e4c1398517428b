use serde::{Deserialize, Serialize};
use crate::models::domain::RankedMatch;

/// Response for a ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCandidates")]
    pub eligible_candidates: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
