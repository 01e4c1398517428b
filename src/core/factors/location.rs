use crate::core::distance::distance_km;
use crate::error::{MatchError, Result};
use crate::models::{Location, ServiceArea};

/// Maximum location score
pub const LOCATION_MAX: f64 = 10.0;

/// The couple gave no event location
const NO_LOCATION_SCORE: f64 = 5.0;

/// The provider did not describe where they work
const NO_SERVICE_AREA_SCORE: f64 = 3.0;

/// Travel radius assumed when a provider gives a base but no radius
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Calculate the location score (0-10)
///
/// Nationwide providers and providers serving the event's region score the
/// maximum. Otherwise, when both sides have coordinates, the score is the
/// maximum inside the provider's travel radius and decays exponentially
/// beyond it.
pub fn location_score(location: Option<&Location>, area: Option<&ServiceArea>) -> Result<f64> {
    let Some(location) = location else {
        return Ok(NO_LOCATION_SCORE);
    };
    let Some(area) = area else {
        return Ok(NO_SERVICE_AREA_SCORE);
    };

    let radius = area.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MatchError::InvalidRadius(radius));
    }

    if area.nationwide {
        return Ok(LOCATION_MAX);
    }

    if let Some(region) = &location.region {
        let region = region.trim();
        if area.regions.iter().any(|r| r.trim().eq_ignore_ascii_case(region)) {
            return Ok(LOCATION_MAX);
        }
    }

    if let (Some(event), Some(base)) = (&location.coordinates, &area.base) {
        let distance = distance_km(base, event)?;
        if distance <= radius {
            return Ok(LOCATION_MAX);
        }
        return Ok(LOCATION_MAX * (-(distance - radius) / radius).exp());
    }

    Ok(0.0)
}
