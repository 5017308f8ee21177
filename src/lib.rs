//! GBHM Matcher - Graph-Based Hierarchical Matching for student-alumni recommendations
//!
//! The core is a stateless rule engine: a student and an alumni profile are compared across
//! eight weighted categories in three tiers (exact matches, skill bridges, mentoring) plus
//! company and availability bonuses. On top of the per-pair score sit ranking, batch ranking
//! and a human-readable explanation, and a thin actix-web layer exposes them over HTTP.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Matcher, FALLBACK_EXPLANATION};
pub use error::ApiError;
pub use models::{
    AlumniProfile, Category, MatchRequest, MatchScore, Recommendation, ScoreBreakdown,
    ScoringWeights, StudentProfile,
};
