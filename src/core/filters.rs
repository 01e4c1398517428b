use crate::models::{CandidateSummary, Requirement};

/// Check whether a candidate can serve the request at all
///
/// This is the pre-scoring stage of the pipeline: candidates of another
/// service category, already booked on the event date, or explicitly
/// excluded by the caller never reach the scorers.
#[inline]
pub fn is_eligible(
    candidate: &CandidateSummary,
    requirement: &Requirement,
    exclude_ids: &[String],
) -> bool {
    if exclude_ids.contains(&candidate.id) {
        return false;
    }

    if !candidate
        .service_category
        .trim()
        .eq_ignore_ascii_case(requirement.service_category.trim())
    {
        return false;
    }

    if let Some(date) = requirement.event_date {
        if candidate.unavailable_dates.contains(&date) {
            return false;
        }
    }

    true
}

/// Requirement tags the candidate also lists, in requirement order
pub fn shared_tags(candidate: &CandidateSummary, requirement: &Requirement) -> Vec<String> {
    requirement
        .tags
        .iter()
        .filter(|tag| {
            candidate
                .tags
                .iter()
                .any(|t| t.trim().eq_ignore_ascii_case(tag.trim()))
        })
        .cloned()
        .collect()
}
