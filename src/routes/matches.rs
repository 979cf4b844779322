use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::models::{
    BestJobRequest, BestJobResponse, ErrorResponse, HealthResponse, JobPosting, JobsResponse,
    RankJobsRequest, RankJobsResponse, ScoreJobRequest,
};
use crate::services::{JobStore, JobStoreError};
use crate::core::MatchEngine;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobStore>,
    pub engine: MatchEngine,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/jobs", web::get().to(list_jobs))
        .route("/jobs/{job_id}", web::get().to(get_job))
        .route("/matches/score", web::post().to(score_job))
        .route("/matches/rank", web::post().to(rank_jobs))
        .route("/matches/best", web::post().to(best_job));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let jobs_loaded = state.jobs.len();
    let status = if jobs_loaded > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        jobs_loaded,
    })
}

/// List active job postings
///
/// GET /api/v1/jobs
async fn list_jobs(state: web::Data<AppState>) -> impl Responder {
    let jobs = state.jobs.active_jobs();

    HttpResponse::Ok().json(JobsResponse {
        total: jobs.len(),
        jobs,
    })
}

/// Fetch one job posting
///
/// GET /api/v1/jobs/{job_id}
async fn get_job(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let job_id = path.into_inner();

    match state.jobs.get_job(&job_id) {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(e @ JobStoreError::NotFound(_)) => {
            HttpResponse::NotFound().json(ErrorResponse::new("Job not found", e.to_string(), 404))
        }
        Err(e) => {
            tracing::error!("Failed to fetch job {}: {}", job_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to fetch job",
                e.to_string(),
                500,
            ))
        }
    }
}

/// Score a candidate against one job
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "candidate": { "education": [], "skills": [], "experience": [], "trainings": [] },
///   "job": { "id": "job-1", "title": "Full Stack Developer" }
/// }
/// ```
async fn score_job(state: web::Data<AppState>, req: web::Json<ScoreJobRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let result = state.engine.match_job(&req.candidate, &req.job);

    tracing::info!(
        "Scored job {} at {} (good fit: {})",
        result.job_id,
        result.match_score,
        result.is_good_fit
    );

    HttpResponse::Ok().json(result)
}

/// Rank jobs for a candidate
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "candidate": { ... },
///   "jobs": [ ... ],
///   "limit": 20
/// }
/// ```
///
/// `jobs` falls back to the active postings of the job store.
async fn rank_jobs(state: web::Data<AppState>, req: web::Json<RankJobsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let jobs = match resolve_jobs(&state, req.jobs.as_deref()) {
        Ok(jobs) => jobs,
        Err(response) => return response,
    };

    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    let mut matches = state.engine.rank_jobs(&req.candidate, &jobs);
    let good_fit_count = matches.iter().filter(|m| m.is_good_fit).count();
    matches.truncate(limit);

    tracing::info!(
        "Returning {} ranked jobs for candidate {} (from {} jobs, {} good fits)",
        matches.len(),
        req.candidate.candidate_id.as_deref().unwrap_or("-"),
        jobs.len(),
        good_fit_count
    );

    HttpResponse::Ok().json(RankJobsResponse {
        candidate_id: req.candidate.candidate_id.clone(),
        matches,
        total_jobs: jobs.len(),
        good_fit_count,
    })
}

/// Best job for a candidate
///
/// POST /api/v1/matches/best
///
/// `bestMatch` is `null` when there are no jobs to rank.
async fn best_job(state: web::Data<AppState>, req: web::Json<BestJobRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for best job request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let jobs = match resolve_jobs(&state, req.jobs.as_deref()) {
        Ok(jobs) => jobs,
        Err(response) => return response,
    };

    let best_match = state.engine.best_job(&req.candidate, &jobs);

    if best_match.is_none() {
        tracing::debug!("No jobs available to match");
    }

    HttpResponse::Ok().json(BestJobResponse {
        candidate_id: req.candidate.candidate_id.clone(),
        best_match,
    })
}

/// Jobs from the request, or the store's active postings when none were sent
fn resolve_jobs(state: &AppState, jobs: Option<&[JobPosting]>) -> Result<Vec<JobPosting>, HttpResponse> {
    match jobs {
        Some(jobs) if jobs.len() > state.matching.max_jobs_per_request => {
            Err(HttpResponse::BadRequest().json(ErrorResponse::new(
                "Too many jobs",
                format!(
                    "At most {} jobs may be ranked per request, got {}",
                    state.matching.max_jobs_per_request,
                    jobs.len()
                ),
                400,
            )))
        }
        Some(jobs) => Ok(jobs.to_vec()),
        None => Ok(state.jobs.active_jobs()),
    }
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "Validation failed",
        errors.to_string(),
        400,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryJobStore;
    use actix_web::{test, App};

    fn create_state() -> AppState {
        let mut developer = JobPosting::new("job-1", "Full Stack Developer");
        developer.optional_skills = Some(vec!["React".to_string(), "Node.js".to_string()]);
        let mut analyst = JobPosting::new("job-2", "Financial Analyst");
        analyst.optional_skills = Some(vec!["Excel".to_string()]);
        let mut closed = JobPosting::new("job-3", "HR Coordinator");
        closed.status = Some("Closed".to_string());

        AppState {
            jobs: Arc::new(InMemoryJobStore::new(vec![developer, analyst, closed]).unwrap()),
            engine: MatchEngine::with_current_year(2025),
            matching: MatchingSettings::default(),
        }
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["status"], "healthy");
        assert_eq!(resp["jobsLoaded"], 3);
    }

    #[actix_web::test]
    async fn test_get_unknown_job() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/jobs/job-9").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_rank_rejects_oversized_payload() {
        let mut state = create_state();
        state.matching.max_jobs_per_request = 1;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/rank")
            .set_json(serde_json::json!({
                "candidate": {},
                "jobs": [
                    {"id": "a", "title": "A"},
                    {"id": "b", "title": "B"}
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
