use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateProfile, JobPosting};

/// Request to score a candidate against one job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreJobRequest {
    #[validate(nested)]
    pub candidate: CandidateProfile,
    #[validate(nested)]
    pub job: JobPosting,
}

/// Request to rank jobs for a candidate
///
/// When `jobs` is omitted the active postings of the job store are ranked.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankJobsRequest {
    #[validate(nested)]
    pub candidate: CandidateProfile,
    #[serde(default)]
    #[validate(nested)]
    pub jobs: Option<Vec<JobPosting>>,
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
}

/// Request for the single best job for a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BestJobRequest {
    #[validate(nested)]
    pub candidate: CandidateProfile,
    #[serde(default)]
    #[validate(nested)]
    pub jobs: Option<Vec<JobPosting>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_request_defaults() {
        let req: RankJobsRequest = serde_json::from_str(r#"{"candidate": {}}"#).unwrap();
        assert!(req.jobs.is_none());
        assert!(req.limit.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rank_request_rejects_zero_limit() {
        let req: RankJobsRequest = serde_json::from_str(r#"{"candidate": {}, "limit": 0}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nested_job_validation() {
        let req: ScoreJobRequest =
            serde_json::from_str(r#"{"candidate": {}, "job": {"id": "job-1", "title": ""}}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nested_experience_validation() {
        let req: BestJobRequest = serde_json::from_str(
            r#"{"candidate": {"experience": [{"position": "Clerk", "yearStart": 20}]}}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
