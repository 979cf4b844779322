use serde::{Deserialize, Serialize};
use crate::models::domain::{JobPosting, MatchResult};

/// Response for the rank jobs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankJobsResponse {
    #[serde(rename = "candidateId")]
    pub candidate_id: Option<String>,
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalJobs")]
    pub total_jobs: usize,
    #[serde(rename = "goodFitCount")]
    pub good_fit_count: usize,
}

/// Response for the best job endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestJobResponse {
    #[serde(rename = "candidateId")]
    pub candidate_id: Option<String>,
    #[serde(rename = "bestMatch")]
    pub best_match: Option<MatchResult>,
}

/// Response listing job postings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobPosting>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "jobsLoaded")]
    pub jobs_loaded: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
