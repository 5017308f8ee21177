// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AlumniProfile, Category, MatchScore, Recommendation, ScoreBreakdown, ScoringWeights,
    StudentProfile, StudentRecommendations, AVAILABLE,
};
pub use requests::{ExplainRequest, MatchRequest};
pub use responses::{
    BatchMatchingResult, ErrorResponse, ExplainResponse, HealthResponse, MatchResponse,
    MatchingResult, ServiceInfo,
};
