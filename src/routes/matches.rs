use actix_web::{web, HttpResponse, Responder};
use std::collections::BTreeMap;
use std::time::Instant;
use validator::Validate;
use crate::core::{describe, Matcher};
use crate::error::ApiError;
use crate::models::{
    BatchMatchingResult, ExplainRequest, ExplainResponse, HealthResponse, MatchRequest,
    MatchResponse, MatchingResult, ServiceInfo,
};

pub const SERVICE_NAME: &str = "GBHM Matching Service";
const SERVICE_DESCRIPTION: &str =
    "Graph-Based Hierarchical Matching Algorithm for student-alumni recommendations";

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: Option<usize>,
}

impl AppState {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            default_limit: None,
        }
    }

    fn limit_for(&self, req: &MatchRequest) -> Option<usize> {
        req.limit.or(self.default_limit)
    }
}

/// Configure service-level routes
pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(service_info))
        .route("/health", web::get().to(health_check));
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::post().to(run_matching))
        .route("/match/batch", web::post().to(batch_matching))
        .route("/explain", web::post().to(explain_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Service information endpoint
async fn service_info() -> impl Responder {
    let endpoints = BTreeMap::from([
        ("health".to_string(), "/health".to_string()),
        ("match".to_string(), "/api/match".to_string()),
        ("match_batch".to_string(), "/api/match/batch".to_string()),
        ("explain".to_string(), "/api/explain".to_string()),
    ]);

    HttpResponse::Ok().json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        status: "running".to_string(),
        endpoints,
    })
}

/// Rank alumni for one student
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "student": { "userId": "s1", "name": "Student", "university": "MIT", "degree": "BS",
///                "preferred_industry": "Technology", "skills": ["Python"],
///                "interests": ["AI"], "looking_for": ["Career Advice"] },
///   "alumni_list": [{ "userId": "a1", "name": "Alumni", "university": "MIT", "degree": "MS",
///                     "industry": "Technology", "skills": ["Python"], "company": "Acme",
///                     "mentoring_areas": ["Career Advice"], "availability": "Available" }],
///   "limit": 10
/// }
/// ```
async fn run_matching(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {}", errors);
        return Err(ApiError::Validation(errors));
    }

    let started = Instant::now();

    tracing::info!(
        "Matching request for student: {} against {} alumni profiles",
        req.student.name,
        req.alumni_list.len()
    );

    let recommendations = state
        .matcher
        .rank(&req.student, &req.alumni_list, state.limit_for(&req));

    let matches: Vec<MatchResponse> = recommendations
        .into_iter()
        .map(MatchResponse::from)
        .collect();
    let processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        "Matching completed in {:.2}ms, generated {} recommendations",
        processing_time_ms,
        matches.len()
    );

    Ok(HttpResponse::Ok().json(MatchingResult {
        success: true,
        message: "Matching completed successfully".to_string(),
        matches,
        timestamp: chrono::Utc::now(),
        total_alumni: req.alumni_list.len(),
        processing_time_ms,
    }))
}

/// Rank alumni for several students at once
///
/// POST /api/match/batch
///
/// Request body is a JSON array of match requests.
async fn batch_matching(
    state: web::Data<AppState>,
    req: web::Json<Vec<MatchRequest>>,
) -> Result<HttpResponse, ApiError> {
    for (index, entry) in req.iter().enumerate() {
        if let Err(source) = entry.validate() {
            tracing::info!("Validation failed for batch entry {}: {}", index, source);
            return Err(ApiError::BatchValidation { index, source });
        }
    }

    let mut requests = req.into_inner();
    for entry in requests.iter_mut() {
        entry.limit = state.limit_for(entry);
    }

    tracing::info!("Batch matching request for {} students", requests.len());

    let results = state.matcher.rank_batch(&requests);

    Ok(HttpResponse::Ok().json(BatchMatchingResult {
        success: true,
        message: "Batch matching completed".to_string(),
        total_students: requests.len(),
        results,
        timestamp: chrono::Utc::now(),
    }))
}

/// Explain why a student and an alumni match
///
/// POST /api/explain
///
/// Request body:
/// ```json
/// { "student": { ... }, "alumni": { ... } }
/// ```
async fn explain_match(
    state: web::Data<AppState>,
    req: web::Json<ExplainRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for explain request: {}", errors);
        return Err(ApiError::Validation(errors));
    }

    let score = state.matcher.calculate_score(&req.student, &req.alumni);
    let explanation = describe(&score.breakdown, &req.alumni);

    tracing::debug!(
        "Explained match {} -> {}: {}",
        req.student.user_id,
        req.alumni.user_id,
        score.total_score
    );

    Ok(HttpResponse::Ok().json(ExplainResponse {
        success: true,
        explanation,
        score: score.total_score,
        breakdown: score.breakdown,
    }))
}
