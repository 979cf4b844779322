use crate::models::{CandidateProfile, JobPosting, ScoreBreakdown, ScoringWeights};
use crate::core::{
    education::education_score,
    experience::experience_score,
    skills::skills_score,
    training::training_score,
};

/// Aggregation weights; these must sum to exactly 1.0
pub const MATCH_WEIGHTS: ScoringWeights = ScoringWeights {
    education: 0.25,
    skills: 0.35,
    experience: 0.25,
    training: 0.15,
};

/// Minimum match score for a candidate to be flagged a good fit
pub const GOOD_FIT_THRESHOLD: u8 = 75;

/// Unrounded sub-scores, each clamped into `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub education: f64,
    pub skills: f64,
    pub experience: f64,
    pub training: f64,
}

impl SubScores {
    /// Round each sub-score for presentation
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            education_score: to_points(self.education),
            skills_score: to_points(self.skills),
            experience_score: to_points(self.experience),
            training_score: to_points(self.training),
        }
    }
}

/// Run the four dimension scorers for one candidate/job pair
pub fn calculate_sub_scores(
    candidate: &CandidateProfile,
    job: &JobPosting,
    current_year: i32,
) -> SubScores {
    SubScores {
        education: clamp_score(education_score(candidate, job)),
        skills: clamp_score(skills_score(candidate, job)),
        experience: clamp_score(experience_score(candidate, job, current_year)),
        training: clamp_score(training_score(candidate, job)),
    }
}

/// Weighted combination of the sub-scores, rounded into 0..=100
///
/// Scoring formula:
/// score = round(
///     education * 0.25 +
///     skills * 0.35 +
///     experience * 0.25 +
///     training * 0.15
/// )
pub fn calculate_match_score(scores: &SubScores, weights: &ScoringWeights) -> u8 {
    let total = scores.education * weights.education
        + scores.skills * weights.skills
        + scores.experience * weights.experience
        + scores.training * weights.training;

    to_points(total)
}

#[inline]
pub fn is_good_fit(match_score: u8) -> bool {
    match_score >= GOOD_FIT_THRESHOLD
}

/// Clamp a raw score into `[0, 100]`; NaN collapses to 0
#[inline]
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

#[inline]
fn to_points(score: f64) -> u8 {
    clamp_score(score).round() as u8
}
