// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, EducationEntry, SkillEntry, ExperienceEntry, TrainingEntry, JobPosting, MatchResult, ScoreBreakdown, ScoringWeights};
pub use requests::{ScoreJobRequest, RankJobsRequest, BestJobRequest};
pub use responses::{RankJobsResponse, BestJobResponse, JobsResponse, HealthResponse, ErrorResponse};
