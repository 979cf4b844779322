//! Recruit Match - candidate-job matching engine for the recruiting platform
//!
//! This library provides the deterministic scoring used to rank job postings
//! for a candidate. Four weighted sub-scores (education, skills, experience,
//! training) are derived from fuzzy text comparison and combined into a
//! 0-100 match score with a good-fit flag.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchEngine, similarity, normalize};
pub use crate::models::{CandidateProfile, JobPosting, MatchResult, ScoreBreakdown};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let engine = MatchEngine::with_current_year(2025);
        let result = engine.match_job(&CandidateProfile::default(), &JobPosting::new("job-1", "Developer"));
        assert_eq!(result.match_score, 10);
        assert_eq!(similarity("Rust", "rust"), 1.0);
    }
}
