use crate::core::text::normalize;
use crate::models::{CandidateProfile, JobPosting};

/// Score when the job lists no skills but the candidate has some
const UNSPECIFIED_SKILLS_SCORE: f64 = 60.0;

/// Points for covering every listed skill
const MATCH_POINTS: f64 = 80.0;

const EXPERT_BONUS: f64 = 5.0;
const ADVANCED_BONUS: f64 = 3.0;
const MAX_PROFICIENCY_BONUS: f64 = 20.0;

/// Score skills fit in `[0, 100]`
///
/// A listed skill is covered when any candidate skill name contains it or is
/// contained by it, after normalization. Proficiency bonus is summed over all
/// candidate skills, matched or not.
pub fn skills_score(candidate: &CandidateProfile, job: &JobPosting) -> f64 {
    if candidate.skills.is_empty() {
        return 0.0;
    }

    let required = job.optional_skills.as_deref().unwrap_or_default();
    if required.is_empty() {
        return UNSPECIFIED_SKILLS_SCORE;
    }

    let candidate_skills: Vec<String> = candidate
        .skills
        .iter()
        .map(|skill| normalize(&skill.name))
        .collect();

    let matched = required
        .iter()
        .map(|skill| normalize(skill))
        .filter(|req| {
            candidate_skills
                .iter()
                .any(|have| have.contains(req.as_str()) || req.contains(have.as_str()))
        })
        .count();

    let match_ratio = matched as f64 / required.len() as f64;

    (match_ratio * MATCH_POINTS + proficiency_bonus(candidate)).min(100.0)
}

/// Capped bonus for "Expert" and "Advanced" skills
fn proficiency_bonus(candidate: &CandidateProfile) -> f64 {
    let bonus: f64 = candidate
        .skills
        .iter()
        .map(|skill| match skill.proficiency_level.as_deref() {
            Some("Expert") => EXPERT_BONUS,
            Some("Advanced") => ADVANCED_BONUS,
            _ => 0.0,
        })
        .sum();

    bonus.min(MAX_PROFICIENCY_BONUS)
}
