use crate::core::text::{normalize, similarity};
use crate::models::{CandidateProfile, JobPosting};

/// Education levels from lowest to highest; the index is the rank
pub const EDUCATION_LEVELS: [&str; 9] = [
    "Elementary",
    "Junior High",
    "Senior High",
    "Diploma",
    "Associate",
    "Bachelor",
    "Master",
    "Doctorate",
    "PhD",
];

/// Points for meeting the minimum education level
const LEVEL_POINTS: f64 = 50.0;

/// Points for a perfect major match
const MAJOR_POINTS: f64 = 50.0;

/// Major credit when the job imposes no major constraint
const NO_MAJOR_REQUIREMENT_POINTS: f64 = 30.0;

/// Rank a free-text education level against [`EDUCATION_LEVELS`]
///
/// Scans from the highest level down so "Master (after Bachelor)" resolves
/// to Master. Unrecognized text ranks 0.
pub fn education_level_rank(level: &str) -> usize {
    let normalized = normalize(level);
    EDUCATION_LEVELS
        .iter()
        .rposition(|name| normalized.contains(normalize(name).as_str()))
        .unwrap_or(0)
}

/// Score education fit in `[0, 100]`: 50 for the level, up to 50 for the major
pub fn education_score(candidate: &CandidateProfile, job: &JobPosting) -> f64 {
    let Some(highest) = candidate
        .education
        .iter()
        .map(|edu| education_level_rank(&edu.level))
        .max()
    else {
        return 0.0;
    };

    let min_required = job
        .min_education
        .as_deref()
        .map_or(0, education_level_rank);

    let level_score = if highest >= min_required {
        LEVEL_POINTS
    } else {
        (highest as f64 / min_required.max(1) as f64) * LEVEL_POINTS
    };

    let major_score = match job.required_majors.as_deref() {
        Some(required) if !required.is_empty() => {
            let best = candidate
                .education
                .iter()
                .filter_map(|edu| edu.major.as_deref().filter(|m| !m.is_empty()))
                .flat_map(|major| required.iter().map(move |req| similarity(major, req)))
                .fold(0.0_f64, f64::max);
            best * MAJOR_POINTS
        }
        _ => NO_MAJOR_REQUIREMENT_POINTS,
    };

    (level_score + major_score).min(100.0)
}
