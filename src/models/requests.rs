use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError};

use crate::models::domain::{CandidateSummary, Requirement};

/// Request to rank a pool of candidates against one requirement
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(custom(function = "validate_requirement"))]
    pub requirement: Requirement,
    #[validate(length(max = 5000))]
    pub candidates: Vec<CandidateSummary>,
    /// External adjustment per candidate id, in [-10, 10]
    #[serde(default)]
    pub bonuses: HashMap<String, f64>,
    #[validate(range(min = 1, max = 200))]
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(rename = "excludeIds", alias = "exclude_ids", default)]
    pub exclude_ids: Vec<String>,
}

fn validate_requirement(requirement: &Requirement) -> Result<(), ValidationError> {
    if requirement.service_category.trim().is_empty() {
        return Err(ValidationError::new("empty_service_category"));
    }
    Ok(())
}
