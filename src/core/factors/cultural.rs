use std::collections::{BTreeSet, HashMap};

use crate::error::{MatchError, Result};
use crate::models::{CultureId, ExpertiseLevel, Importance, ProviderCulture};

/// Highest attainable cultural score, reached for an essential requirement
pub const CULTURAL_MAX: f64 = 30.0;

/// Maximum cultural score for each importance tier
pub fn tier_max(importance: Importance) -> f64 {
    match importance {
        Importance::Essential => CULTURAL_MAX,
        Importance::Important => 25.0,
        Importance::NiceToHave => 15.0,
    }
}

/// Match weight of an expertise level, as an integer percentage
///
/// Levels without an agreed weight count as no match.
fn expertise_weight(level: &ExpertiseLevel) -> u32 {
    match level {
        ExpertiseLevel::Specialised => 100,
        ExpertiseLevel::Experienced => 60,
        ExpertiseLevel::Other(_) => 0,
    }
}

fn normalize(id: &CultureId) -> Result<String> {
    let trimmed = id.as_str().trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(MatchError::InvalidCulture(id.as_str().to_string()));
    }
    Ok(trimmed.to_lowercase())
}

/// Resolve the provider's cultures into their best match weight per culture
fn provider_weights(provider: &[ProviderCulture]) -> Result<HashMap<String, u32>> {
    let mut weights = HashMap::with_capacity(provider.len());
    for culture in provider {
        let weight = match culture {
            ProviderCulture::Plain(_) => 100,
            ProviderCulture::Annotated { expertise_level, .. } => expertise_weight(expertise_level),
        };
        let entry = weights.entry(normalize(culture.id())?).or_insert(0);
        *entry = (*entry).max(weight);
    }
    Ok(weights)
}

/// Calculate the cultural fit score (0 to the importance tier's maximum)
///
/// The score is the average match weight across desired cultures, scaled
/// by the tier maximum. Weights are kept as integer percentages so that
/// documented values come out exact (30 x 60% = 18).
pub fn cultural_score(
    desired: &BTreeSet<CultureId>,
    importance: Importance,
    provider: &[ProviderCulture],
) -> Result<f64> {
    let desired = desired
        .iter()
        .map(normalize)
        .collect::<Result<BTreeSet<_>>>()?;
    let offered = provider_weights(provider)?;

    if desired.is_empty() || offered.is_empty() {
        return Ok(0.0);
    }

    let total_pct: u32 = desired
        .iter()
        .map(|culture| offered.get(culture).copied().unwrap_or(0))
        .sum();

    Ok(tier_max(importance) * total_pct as f64 / (100.0 * desired.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desired(ids: &[&str]) -> BTreeSet<CultureId> {
        ids.iter().map(|id| CultureId::from(*id)).collect()
    }

    fn plain(ids: &[&str]) -> Vec<ProviderCulture> {
        ids.iter().map(|id| ProviderCulture::plain(id)).collect()
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let score = cultural_score(&desired(&[]), Importance::Essential, &plain(&["maghreb"]));
        assert_eq!(score.unwrap(), 0.0);

        let score = cultural_score(&desired(&["maghreb"]), Importance::Essential, &[]);
        assert_eq!(score.unwrap(), 0.0);
    }

    #[test]
    fn test_full_match_per_tier() {
        let score = cultural_score(
            &desired(&["maghreb", "turc"]),
            Importance::Essential,
            &plain(&["maghreb", "turc"]),
        );
        assert_eq!(score.unwrap(), 30.0);

        let wanted = desired(&["maghreb"]);
        let offered = plain(&["maghreb"]);
        assert_eq!(cultural_score(&wanted, Importance::Important, &offered).unwrap(), 25.0);
        assert_eq!(cultural_score(&wanted, Importance::NiceToHave, &offered).unwrap(), 15.0);
    }

    #[test]
    fn test_partial_match_is_averaged() {
        let score = cultural_score(
            &desired(&["maghreb", "turc", "libanais"]),
            Importance::Essential,
            &plain(&["maghreb"]),
        );
        assert_eq!(score.unwrap(), 10.0);
    }

    #[test]
    fn test_expertise_levels() {
        let wanted = desired(&["maghreb"]);
        let specialised = cultural_score(
            &wanted,
            Importance::Essential,
            &[ProviderCulture::annotated("maghreb", ExpertiseLevel::Specialised)],
        )
        .unwrap();
        let experienced = cultural_score(
            &wanted,
            Importance::Essential,
            &[ProviderCulture::annotated("maghreb", ExpertiseLevel::Experienced)],
        )
        .unwrap();

        assert!(specialised > experienced);
        assert_eq!(experienced, 18.0);
    }

    #[test]
    fn test_mixed_expertise() {
        let score = cultural_score(
            &desired(&["maghreb", "turc"]),
            Importance::Essential,
            &[
                ProviderCulture::annotated("maghreb", ExpertiseLevel::Specialised),
                ProviderCulture::annotated("turc", ExpertiseLevel::Experienced),
            ],
        );
        assert_eq!(score.unwrap(), 24.0);
    }

    #[test]
    fn test_unknown_expertise_counts_as_no_match() {
        let score = cultural_score(
            &desired(&["maghreb"]),
            Importance::Essential,
            &[ProviderCulture::annotated(
                "maghreb",
                ExpertiseLevel::Other("debutant".to_string()),
            )],
        );
        assert_eq!(score.unwrap(), 0.0);
    }

    #[test]
    fn test_best_listing_wins_and_ids_are_normalized() {
        let score = cultural_score(
            &desired(&["Maghreb"]),
            Importance::Essential,
            &[
                ProviderCulture::annotated("maghreb", ExpertiseLevel::Experienced),
                ProviderCulture::plain(" MAGHREB "),
            ],
        );
        assert_eq!(score.unwrap(), 30.0);
    }

    #[test]
    fn test_malformed_culture_rejected() {
        let result = cultural_score(
            &desired(&["maghreb"]),
            Importance::Essential,
            &plain(&["   "]),
        );
        assert!(matches!(result, Err(MatchError::InvalidCulture(_))));

        let result = cultural_score(
            &desired(&["afrique de l'ouest"]),
            Importance::Essential,
            &plain(&["maghreb"]),
        );
        assert!(matches!(result, Err(MatchError::InvalidCulture(_))));
    }

    #[test]
    fn test_malformed_culture_rejected_even_without_provider_cultures() {
        let result = cultural_score(&desired(&["  "]), Importance::Essential, &[]);
        assert!(matches!(result, Err(MatchError::InvalidCulture(_))));

        let result = cultural_score(&desired(&[]), Importance::Important, &plain(&[""]));
        assert!(matches!(result, Err(MatchError::InvalidCulture(_))));
    }
}
