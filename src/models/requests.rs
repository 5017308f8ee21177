use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AlumniProfile, StudentProfile};

/// Request to rank a list of alumni for one student
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(nested)]
    pub student: StudentProfile,
    #[validate(nested)]
    #[serde(default)]
    pub alumni_list: Vec<AlumniProfile>,
    /// Keep only the best N recommendations. Absent or 0 keeps all.
    #[serde(default, alias = "top_n")]
    pub limit: Option<usize>,
}

/// Request to explain a single student/alumni pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExplainRequest {
    #[validate(nested)]
    pub student: StudentProfile,
    #[validate(nested)]
    pub alumni: AlumniProfile,
}
