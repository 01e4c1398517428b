/// Maximum experience score
pub const EXPERIENCE_MAX: f64 = 10.0;

/// Neutral score when the provider did not state their experience
const NO_EXPERIENCE_SCORE: f64 = 5.0;

/// Years of activity after which no further credit is given
const SATURATION_YEARS: u32 = 10;

/// Calculate the experience score (0-10)
///
/// One point per year of activity, saturating at ten years.
#[inline]
pub fn experience_score(years: Option<u32>) -> f64 {
    match years {
        None => NO_EXPERIENCE_SCORE,
        Some(years) => EXPERIENCE_MAX * years.min(SATURATION_YEARS) as f64 / SATURATION_YEARS as f64,
    }
}
