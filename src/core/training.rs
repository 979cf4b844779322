use crate::models::{CandidateProfile, JobPosting};

/// Score for a candidate who never logged any training
const NO_TRAINING_SCORE: f64 = 30.0;

const POINTS_PER_TRAINING: f64 = 10.0;
const MAX_BASE_POINTS: f64 = 40.0;
const POINTS_PER_KEYWORD: f64 = 15.0;
const MAX_KEYWORD_POINTS: f64 = 60.0;

/// Training words this short are ignored
const MIN_KEYWORD_CHARS: usize = 4;

/// Score training relevance in `[0, 100]`
///
/// Each training word longer than three characters that appears anywhere in
/// the job's skills, title or description earns keyword points.
pub fn training_score(candidate: &CandidateProfile, job: &JobPosting) -> f64 {
    if candidate.trainings.is_empty() {
        return NO_TRAINING_SCORE;
    }

    let job_keywords = job_keywords(job);

    let relevance: f64 = candidate
        .trainings
        .iter()
        .map(|training| {
            let text = format!(
                "{} {}",
                training.title,
                training.organizer.as_deref().unwrap_or_default()
            )
            .to_lowercase();

            text.split_whitespace()
                .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS && job_keywords.contains(*word))
                .count() as f64
                * POINTS_PER_KEYWORD
        })
        .sum();

    let base_score = (candidate.trainings.len() as f64 * POINTS_PER_TRAINING).min(MAX_BASE_POINTS);

    (base_score + relevance.min(MAX_KEYWORD_POINTS)).min(100.0)
}

/// Lower-cased skills, title and description joined by spaces
fn job_keywords(job: &JobPosting) -> String {
    job.optional_skills
        .iter()
        .flatten()
        .map(String::as_str)
        .chain([job.title.as_str(), job.description.as_deref().unwrap_or_default()])
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainingEntry;

    fn candidate_with(trainings: Vec<TrainingEntry>) -> CandidateProfile {
        CandidateProfile {
            trainings,
            ..Default::default()
        }
    }

    fn full_stack_job() -> JobPosting {
        let mut job = JobPosting::new("job-1", "Full Stack Developer");
        job.optional_skills = Some(vec!["React".to_string(), "Node.js".to_string()]);
        job.description = Some("Develop web applications with modern technologies.".to_string());
        job
    }

    #[test]
    fn test_no_training_floor() {
        assert_eq!(training_score(&CandidateProfile::default(), &full_stack_job()), 30.0);
    }

    #[test]
    fn test_job_keywords() {
        assert_eq!(
            job_keywords(&full_stack_job()),
            "react node.js full stack developer develop web applications with modern technologies."
        );
    }

    #[test]
    fn test_keyword_hits() {
        // only "react" appears in the job text
        let candidate = candidate_with(vec![TrainingEntry::new(
            "React Advanced Patterns",
            Some("Frontend Masters"),
        )]);
        assert_eq!(training_score(&candidate, &full_stack_job()), 25.0);
    }

    #[test]
    fn test_short_words_ignored() {
        // "web" is only three characters long
        let candidate = candidate_with(vec![TrainingEntry::new("Web", None)]);
        assert_eq!(training_score(&candidate, &full_stack_job()), 10.0);
    }

    #[test]
    fn test_substring_hits_count() {
        // "full" and "stack" hit; "development" is longer than "developer"
        let candidate = candidate_with(vec![TrainingEntry::new("Full Stack Web Development", Some("Codecademy"))]);
        assert_eq!(training_score(&candidate, &full_stack_job()), 40.0);
    }

    #[test]
    fn test_caps() {
        let trainings = (0..6)
            .map(|_| TrainingEntry::new("React Developer Applications", None))
            .collect();
        let candidate = candidate_with(trainings);
        assert_eq!(training_score(&candidate, &full_stack_job()), 100.0);
    }
}
