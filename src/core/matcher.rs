use chrono::Datelike;

use crate::models::{CandidateProfile, JobPosting, MatchResult};
use crate::core::scoring::{calculate_match_score, calculate_sub_scores, is_good_fit, MATCH_WEIGHTS};

/// Main matching orchestrator - scores one candidate against job postings
///
/// # Pipeline Stages
/// 1. Education, skills, experience and training sub-scores
/// 2. Clamping into `[0, 100]`
/// 3. Weighted aggregation and good-fit flag
/// 4. Ranking (for `rank_jobs` / `best_job`)
///
/// The engine holds no state besides the year used to close open-ended
/// experience entries, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEngine {
    current_year: i32,
}

impl MatchEngine {
    /// Engine pinned to the current calendar year (UTC)
    pub fn new() -> Self {
        Self::with_current_year(chrono::Utc::now().year())
    }

    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Score a candidate against a single job posting
    pub fn match_job(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
        let sub_scores = calculate_sub_scores(candidate, job, self.current_year);
        let match_score = calculate_match_score(&sub_scores, &MATCH_WEIGHTS);
        let breakdown = sub_scores.breakdown();

        tracing::trace!(
            job_id = %job.id,
            match_score,
            education = breakdown.education_score,
            skills = breakdown.skills_score,
            experience = breakdown.experience_score,
            training = breakdown.training_score,
            "Scored job"
        );

        MatchResult {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            match_score,
            is_good_fit: is_good_fit(match_score),
            breakdown,
        }
    }

    /// Score every job and sort by match score, highest first
    ///
    /// The sort is stable: jobs with equal scores keep their input order.
    pub fn rank_jobs(&self, candidate: &CandidateProfile, jobs: &[JobPosting]) -> Vec<MatchResult> {
        let mut matches: Vec<MatchResult> = jobs
            .iter()
            .map(|job| self.match_job(candidate, job))
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            candidate_id = candidate.candidate_id.as_deref().unwrap_or("-"),
            jobs = jobs.len(),
            top_score = matches.first().map(|m| m.match_score),
            "Ranked jobs"
        );

        matches
    }

    /// Highest-ranked job, or `None` when there are no jobs
    pub fn best_job(&self, candidate: &CandidateProfile, jobs: &[JobPosting]) -> Option<MatchResult> {
        self.rank_jobs(candidate, jobs).into_iter().next()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry, SkillEntry, TrainingEntry};

    fn create_candidate() -> CandidateProfile {
        CandidateProfile {
            candidate_id: Some("candidate-1".to_string()),
            education: vec![EducationEntry::new("Bachelor", Some("Computer Science"))],
            skills: vec![
                SkillEntry::new("React", Some("Expert")),
                SkillEntry::new("Node.js", Some("Advanced")),
                SkillEntry::new("TypeScript", Some("Advanced")),
            ],
            experience: vec![ExperienceEntry::new(
                "Full Stack Developer",
                Some("Developed web applications using React and Node.js"),
                Some(2019),
                None,
            )],
            trainings: vec![TrainingEntry::new("React Advanced Patterns", Some("Frontend Masters"))],
        }
    }

    fn create_job(id: &str, title: &str, skills: &[&str]) -> JobPosting {
        let mut job = JobPosting::new(id, title);
        job.min_education = Some("Bachelor".to_string());
        job.required_majors = Some(vec!["Computer Science".to_string()]);
        job.optional_skills = Some(skills.iter().map(|s| s.to_string()).collect());
        job
    }

    #[test]
    fn test_match_job_strong_fit() {
        let engine = MatchEngine::with_current_year(2025);
        let job = create_job("job-1", "Full Stack Developer", &["React", "Node.js", "TypeScript"]);

        let result = engine.match_job(&create_candidate(), &job);

        assert_eq!(result.job_id, "job-1");
        assert_eq!(result.job_title, "Full Stack Developer");
        assert_eq!(result.breakdown.education_score, 100);
        assert_eq!(result.breakdown.skills_score, 91);
        assert_eq!(result.breakdown.experience_score, 100);
        assert!(result.is_good_fit);
    }

    #[test]
    fn test_match_is_deterministic() {
        let engine = MatchEngine::with_current_year(2025);
        let job = create_job("job-1", "Backend Engineer", &["Go"]);
        let candidate = create_candidate();

        assert_eq!(engine.match_job(&candidate, &job), engine.match_job(&candidate, &job));
    }

    #[test]
    fn test_rank_jobs_sorted_descending() {
        let engine = MatchEngine::with_current_year(2025);
        let jobs = vec![
            create_job("job-1", "HR Coordinator", &["Recruiting"]),
            create_job("job-2", "Full Stack Developer", &["React", "Node.js"]),
            create_job("job-3", "Frontend Developer", &["React"]),
        ];

        let ranked = engine.rank_jobs(&create_candidate(), &jobs);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].job_id, "job-2");
        assert_eq!(ranked[2].job_id, "job-1");
        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_rank_jobs_ties_keep_input_order() {
        let engine = MatchEngine::with_current_year(2025);
        let jobs: Vec<JobPosting> = ["a", "b", "c"]
            .iter()
            .map(|id| create_job(id, "Full Stack Developer", &["React"]))
            .collect();

        let ranked = engine.rank_jobs(&create_candidate(), &jobs);
        let ids: Vec<&str> = ranked.iter().map(|m| m.job_id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_best_job() {
        let engine = MatchEngine::with_current_year(2025);
        let jobs = vec![
            create_job("job-1", "Accountant", &["Excel"]),
            create_job("job-2", "Full Stack Developer", &["React"]),
        ];

        let best = engine.best_job(&create_candidate(), &jobs).unwrap();
        assert_eq!(best.job_id, "job-2");

        assert!(engine.best_job(&create_candidate(), &[]).is_none());
    }

    #[test]
    fn test_current_year_is_injected() {
        let engine = MatchEngine::with_current_year(2020);
        assert_eq!(engine.current_year(), 2020);

        let job = create_job("job-1", "Accountant", &["Excel"]);
        let candidate = create_candidate();

        // Open-ended 2019 entry: one year of experience in 2020, six in 2025
        let early = engine.match_job(&candidate, &job);
        let later = MatchEngine::with_current_year(2025).match_job(&candidate, &job);
        assert!(early.breakdown.experience_score < later.breakdown.experience_score);
    }
}
