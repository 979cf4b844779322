use serde::{Deserialize, Serialize};
use validator::Validate;

/// Candidate view consumed by the matching engine
///
/// Every list defaults to empty when absent from the payload; an empty list
/// and a missing one score identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[serde(rename = "candidateId", default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    #[validate(nested)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub trainings: Vec<TrainingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub level: String,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(rename = "schoolName", default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl EducationEntry {
    pub fn new(level: impl Into<String>, major: Option<&str>) -> Self {
        Self {
            level: level.into(),
            major: major.map(str::to_string),
            school_name: None,
            city: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(alias = "skillName")]
    pub name: String,
    #[serde(rename = "proficiencyLevel", default)]
    pub proficiency_level: Option<String>,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, proficiency_level: Option<&str>) -> Self {
        Self {
            name: name.into(),
            proficiency_level: proficiency_level.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExperienceEntry {
    pub position: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "yearStart", default)]
    #[validate(range(min = 1900, max = 2100))]
    pub year_start: Option<i32>,
    #[serde(rename = "yearEnd", default)]
    #[validate(range(min = 1900, max = 2100))]
    pub year_end: Option<i32>,
    #[serde(rename = "companyName", default)]
    pub company_name: Option<String>,
}

impl ExperienceEntry {
    pub fn new(
        position: impl Into<String>,
        description: Option<&str>,
        year_start: Option<i32>,
        year_end: Option<i32>,
    ) -> Self {
        Self {
            position: position.into(),
            description: description.map(str::to_string),
            year_start,
            year_end,
            company_name: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingEntry {
    pub title: String,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl TrainingEntry {
    pub fn new(title: impl Into<String>, organizer: Option<&str>) -> Self {
        Self {
            title: title.into(),
            organizer: organizer.map(str::to_string),
            year: None,
        }
    }
}

/// Job posting as supplied by the job store or a client payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobPosting {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "minEducation", default)]
    pub min_education: Option<String>,
    #[serde(rename = "requiredMajors", default)]
    pub required_majors: Option<Vec<String>>,
    #[serde(rename = "optionalSkills", default)]
    pub optional_skills: Option<Vec<String>>,
    #[serde(default = "default_status")]
    pub status: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(rename = "closeDate", default)]
    pub close_date: Option<String>,
    #[serde(default)]
    pub criteria: Option<String>,
}

fn default_status() -> Option<String> {
    Some(JobPosting::ACTIVE.to_string())
}

impl JobPosting {
    pub const ACTIVE: &'static str = "Active";

    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            min_education: None,
            required_majors: None,
            optional_skills: None,
            status: default_status(),
            salary: None,
            close_date: None,
            criteria: None,
        }
    }

    /// Postings without a status are treated as active
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .map_or(true, |status| status.eq_ignore_ascii_case(Self::ACTIVE))
    }
}

/// Per-dimension scores, each rounded into 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "educationScore")]
    pub education_score: u8,
    #[serde(rename = "skillsScore")]
    pub skills_score: u8,
    #[serde(rename = "experienceScore")]
    pub experience_score: u8,
    #[serde(rename = "trainingScore")]
    pub training_score: u8,
}

/// Scored fit of one candidate against one job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "isGoodFit")]
    pub is_good_fit: bool,
    pub breakdown: ScoreBreakdown,
}

/// Fixed aggregation weights for the four sub-scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub education: f64,
    pub skills: f64,
    pub experience: f64,
    pub training: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.education + self.skills + self.experience + self.training
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_lists_default_to_empty() {
        let candidate: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert!(candidate.education.is_empty());
        assert!(candidate.skills.is_empty());
        assert!(candidate.experience.is_empty());
        assert!(candidate.trainings.is_empty());
    }

    #[test]
    fn test_skill_accepts_store_field_name() {
        let skill: SkillEntry =
            serde_json::from_str(r#"{"skillName": "React", "proficiencyLevel": "Expert"}"#).unwrap();
        assert_eq!(skill.name, "React");
        assert_eq!(skill.proficiency_level.as_deref(), Some("Expert"));
    }

    #[test]
    fn test_job_status_defaults_to_active() {
        let job: JobPosting = serde_json::from_str(r#"{"id": "job-1", "title": "Analyst"}"#).unwrap();
        assert!(job.is_active());

        let mut closed = job.clone();
        closed.status = Some("Closed".to_string());
        assert!(!closed.is_active());
    }

    #[test]
    fn test_experience_year_validation() {
        let valid = ExperienceEntry::new("Developer", None, Some(2019), None);
        assert!(valid.validate().is_ok());

        let invalid = ExperienceEntry::new("Developer", None, Some(-5), Some(2020));
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_match_result_wire_names() {
        let result = MatchResult {
            job_id: "job-1".to_string(),
            job_title: "Analyst".to_string(),
            match_score: 80,
            is_good_fit: true,
            breakdown: ScoreBreakdown {
                education_score: 100,
                skills_score: 70,
                experience_score: 60,
                training_score: 30,
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["jobId"], "job-1");
        assert_eq!(json["isGoodFit"], true);
        assert_eq!(json["breakdown"]["skillsScore"], 70);
    }
}
