use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::domain::{Recommendation, ScoreBreakdown, StudentRecommendations};

/// Single match entry of a match response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub alumni_id: String,
    pub alumni_name: String,
    pub total_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub common_skills: Vec<String>,
    pub common_interests: Vec<String>,
    pub matching_areas: Vec<String>,
}

impl From<Recommendation> for MatchResponse {
    fn from(rec: Recommendation) -> Self {
        Self {
            alumni_id: rec.alumni_id,
            alumni_name: rec.alumni_name,
            total_score: rec.total_score,
            common_skills: rec.score_breakdown.common_skills.clone(),
            common_interests: rec.score_breakdown.common_interests.clone(),
            matching_areas: rec.score_breakdown.matching_areas.clone(),
            score_breakdown: rec.score_breakdown,
        }
    }
}

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingResult {
    pub success: bool,
    pub message: String,
    pub matches: Vec<MatchResponse>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub total_alumni: usize,
    pub processing_time_ms: f64,
}

/// Response for the batch match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMatchingResult {
    pub success: bool,
    pub message: String,
    pub results: Vec<StudentRecommendations>,
    pub total_students: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Response for the explain endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub success: bool,
    pub explanation: String,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Service description served at the root path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub status: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
