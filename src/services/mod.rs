// Service exports
pub mod job_store;

pub use job_store::{InMemoryJobStore, JobStore, JobStoreError};
