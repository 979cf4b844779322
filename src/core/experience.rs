use crate::core::text::similarity;
use crate::models::{CandidateProfile, JobPosting};

/// Score for a candidate with no experience entries
const NO_EXPERIENCE_SCORE: f64 = 20.0;

const POINTS_PER_YEAR: f64 = 8.0;
const MAX_YEARS_POINTS: f64 = 40.0;
const RELEVANCE_POINTS: f64 = 60.0;

/// Description matches count half as much as position-title matches
const DESCRIPTION_WEIGHT: f64 = 0.5;

/// Score experience fit in `[0, 100]`
///
/// Years are summed over all entries, with a missing start or end year
/// standing in for `current_year`. Relevance is the best position-title or
/// half-weighted description similarity across entries.
pub fn experience_score(candidate: &CandidateProfile, job: &JobPosting, current_year: i32) -> f64 {
    if candidate.experience.is_empty() {
        return NO_EXPERIENCE_SCORE;
    }

    let job_description = job.description.as_deref().filter(|d| !d.is_empty());

    let mut total_years: i64 = 0;
    let mut relevance = 0.0_f64;

    for exp in &candidate.experience {
        let start = exp.year_start.unwrap_or(current_year);
        let end = exp.year_end.unwrap_or(current_year);
        total_years += i64::from(end) - i64::from(start);

        if !job.title.is_empty() {
            relevance = relevance.max(similarity(&exp.position, &job.title));
        }

        let description = exp.description.as_deref().filter(|d| !d.is_empty());
        if let (Some(theirs), Some(ours)) = (description, job_description) {
            relevance = relevance.max(similarity(theirs, ours) * DESCRIPTION_WEIGHT);
        }
    }

    let years_score = (total_years as f64 * POINTS_PER_YEAR).min(MAX_YEARS_POINTS);
    let relevance_points = relevance * RELEVANCE_POINTS;

    (years_score + relevance_points).clamp(0.0, 100.0)
}
