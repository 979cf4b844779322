use crate::models::JobPosting;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or reading job postings
#[derive(Debug, Error)]
pub enum JobStoreError {
    #[error("Failed to read job seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid job seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate job id: {0}")]
    Duplicate(String),

    #[error("Job not found: {0}")]
    NotFound(String),
}

/// Read-only source of job postings
///
/// The matching service only ever reads postings; whatever system owns job
/// CRUD sits behind this trait.
pub trait JobStore: Send + Sync {
    /// All postings, in store order
    fn all_jobs(&self) -> Vec<JobPosting>;

    /// Postings open for matching, in store order
    fn active_jobs(&self) -> Vec<JobPosting> {
        self.all_jobs().into_iter().filter(JobPosting::is_active).collect()
    }

    fn get_job(&self, job_id: &str) -> Result<JobPosting, JobStoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Job store backed by a vector loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobStore {
    jobs: Vec<JobPosting>,
}

impl InMemoryJobStore {
    /// Create a store, rejecting duplicate job ids
    pub fn new(jobs: Vec<JobPosting>) -> Result<Self, JobStoreError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(job.id.as_str()) {
                return Err(JobStoreError::Duplicate(job.id.clone()));
            }
        }

        Ok(Self { jobs })
    }

    /// Parse a JSON array of job postings
    pub fn from_json_str(json: &str) -> Result<Self, JobStoreError> {
        let jobs: Vec<JobPosting> = serde_json::from_str(json)?;
        Self::new(jobs)
    }

    /// Load a JSON seed file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, JobStoreError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let store = Self::from_json_str(&json)?;

        tracing::info!(
            "Loaded {} job postings ({} active) from {}",
            store.len(),
            store.active_jobs().len(),
            path.display()
        );

        Ok(store)
    }
}

impl JobStore for InMemoryJobStore {
    fn all_jobs(&self) -> Vec<JobPosting> {
        self.jobs.clone()
    }

    fn get_job(&self, job_id: &str) -> Result<JobPosting, JobStoreError> {
        self.jobs
            .iter()
            .find(|job| job.id == job_id)
            .cloned()
            .ok_or_else(|| JobStoreError::NotFound(job_id.to_string()))
    }

    fn len(&self) -> usize {
        self.jobs.len()
    }
}
