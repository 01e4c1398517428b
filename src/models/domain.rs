use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of a cultural tradition (e.g. "maghreb", "turc")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CultureId(String);

impl CultureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CultureId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How much the couple cares about their cultural requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    #[serde(alias = "essentiel")]
    Essential,
    #[default]
    Important,
    #[serde(alias = "souhaitable", alias = "nice-to-have")]
    NiceToHave,
}

/// Provider-declared depth of experience with a culture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpertiseLevel {
    Specialised,
    Experienced,
    /// Any level without an agreed weight
    Other(String),
}

impl From<String> for ExpertiseLevel {
    fn from(level: String) -> Self {
        match level.trim().to_lowercase().as_str() {
            "specialise" | "specialised" | "specialized" | "spécialisé" => Self::Specialised,
            "experimente" | "experienced" | "expérimenté" => Self::Experienced,
            _ => Self::Other(level),
        }
    }
}

impl From<ExpertiseLevel> for String {
    fn from(level: ExpertiseLevel) -> Self {
        match level {
            ExpertiseLevel::Specialised => "specialised".to_string(),
            ExpertiseLevel::Experienced => "experienced".to_string(),
            ExpertiseLevel::Other(level) => level,
        }
    }
}

/// A culture a provider supports, either plainly listed or annotated
/// with an expertise level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderCulture {
    Plain(CultureId),
    Annotated {
        id: CultureId,
        #[serde(rename = "expertiseLevel", alias = "expertise_level")]
        expertise_level: ExpertiseLevel,
    },
}

impl ProviderCulture {
    pub fn plain(id: &str) -> Self {
        Self::Plain(CultureId::from(id))
    }

    pub fn annotated(id: &str, expertise_level: ExpertiseLevel) -> Self {
        Self::Annotated {
            id: CultureId::from(id),
            expertise_level,
        }
    }

    pub fn id(&self) -> &CultureId {
        match self {
            Self::Plain(id) | Self::Annotated { id, .. } => id,
        }
    }
}

/// Tolerance of the couple towards providers outside their budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flexibility {
    Strict,
    #[serde(alias = "un_peu_flexible")]
    SomewhatFlexible,
    #[default]
    Flexible,
}

/// Budget stated by the couple
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub flexibility: Flexibility,
}

/// Price range advertised by a provider
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where the event takes place
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

/// Where a provider is willing to work
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceArea {
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub base: Option<GeoPoint>,
    #[serde(rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub nationwide: bool,
}

/// What the couple is looking for. Built once per request, never mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(rename = "serviceCategory")]
    pub service_category: String,
    #[serde(default)]
    pub cultures: BTreeSet<CultureId>,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(rename = "eventDate", default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Snapshot of one provider's matchable attributes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "serviceCategory")]
    pub service_category: String,
    #[serde(default)]
    pub cultures: Vec<ProviderCulture>,
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<PriceRange>,
    #[serde(rename = "averageRating", default)]
    pub average_rating: Option<f64>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: Option<u32>,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: Option<u32>,
    #[serde(rename = "serviceArea", default)]
    pub service_area: Option<ServiceArea>,
    #[serde(rename = "impressionCount", default)]
    pub impression_count: u64,
    #[serde(rename = "unavailableDates", default)]
    pub unavailable_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Raw sub-scores for one candidate, each on its own scale
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FactorScores {
    pub cultural: f64,
    pub budget: f64,
    pub reputation: f64,
    pub experience: f64,
    pub location: f64,
}

/// Per-candidate score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub cultural: f64,
    pub budget: f64,
    pub reputation: f64,
    pub experience: f64,
    pub location: f64,
    #[serde(rename = "totalAlgorithmic")]
    pub total_algorithmic: f64,
    #[serde(rename = "externalBonus")]
    pub external_bonus: Option<f64>,
    #[serde(rename = "finalScore")]
    pub final_score: f64,
}

/// Final ranked result for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub candidate: CandidateSummary,
    pub rank: usize,
    pub breakdown: ScoreBreakdown,
    #[serde(rename = "adjustedScore")]
    pub adjusted_score: f64,
    #[serde(rename = "fairnessApplied")]
    pub fairness_applied: bool,
    #[serde(rename = "sharedTags")]
    pub shared_tags: Vec<String>,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_cultures_deserialize_both_shapes() {
        let cultures: Vec<ProviderCulture> = serde_json::from_str(
            r#"["maghreb", {"id": "turc", "expertiseLevel": "experimente"}]"#,
        )
        .unwrap();

        assert_eq!(cultures[0], ProviderCulture::plain("maghreb"));
        assert_eq!(
            cultures[1],
            ProviderCulture::annotated("turc", ExpertiseLevel::Experienced)
        );
    }

    #[test]
    fn test_unknown_expertise_level_is_kept() {
        let level = ExpertiseLevel::from("debutant".to_string());
        assert_eq!(level, ExpertiseLevel::Other("debutant".to_string()));
    }

    #[test]
    fn test_requirement_defaults() {
        let requirement: Requirement =
            serde_json::from_str(r#"{"serviceCategory": "traiteur"}"#).unwrap();

        assert!(requirement.cultures.is_empty());
        assert_eq!(requirement.importance, Importance::Important);
        assert!(requirement.budget.is_none());
    }

    #[test]
    fn test_budget_flexibility_defaults_to_flexible() {
        let budget: Budget = serde_json::from_str(r#"{"min": 500, "max": 2000}"#).unwrap();
        assert_eq!(budget.flexibility, Flexibility::Flexible);
    }
}
