use rayon::prelude::*;
use crate::models::{
    AlumniProfile, MatchRequest, MatchScore, Recommendation, ScoringWeights, StudentProfile,
    StudentRecommendations,
};
use crate::core::{
    explain::describe,
    normalize::{AlumniKeys, StudentKeys},
    scoring::calculate_score,
};

/// Main matching orchestrator
///
/// Owns an immutable weight table; every operation is a pure function of its inputs,
/// so a single `Matcher` can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one student/alumni pair
    pub fn calculate_score(
        &self,
        student: &StudentProfile,
        alumni: &AlumniProfile,
    ) -> MatchScore {
        calculate_score(
            &StudentKeys::from(student),
            &AlumniKeys::from(alumni),
            &self.weights,
        )
    }

    /// Rank alumni for a student
    ///
    /// Sorted by total score descending; ties keep their input order.
    /// `top_n` of `None` or `Some(0)` returns the full ranking.
    pub fn rank(
        &self,
        student: &StudentProfile,
        alumni_list: &[AlumniProfile],
        top_n: Option<usize>,
    ) -> Vec<Recommendation> {
        let student_keys = StudentKeys::from(student);

        let mut recommendations: Vec<Recommendation> = alumni_list
            .iter()
            .map(|alumni| {
                let alumni_keys = AlumniKeys::from(alumni);
                let score = calculate_score(&student_keys, &alumni_keys, &self.weights);
                Recommendation::new(alumni, score)
            })
            .collect();

        // sort_by is stable
        recommendations.sort_by(|a, b| b.total_score.cmp(&a.total_score));

        if let Some(n) = top_n.filter(|n| *n > 0) {
            recommendations.truncate(n);
        }

        recommendations
    }

    /// Rank every request of a batch independently, in parallel
    ///
    /// Results come back in request order.
    pub fn rank_batch(&self, requests: &[MatchRequest]) -> Vec<StudentRecommendations> {
        requests
            .par_iter()
            .map(|req| {
                let matches = self.rank(&req.student, &req.alumni_list, req.limit);
                StudentRecommendations {
                    student_id: req.student.user_id.clone(),
                    student_name: req.student.name.clone(),
                    match_count: matches.len(),
                    matches,
                }
            })
            .collect()
    }

    /// Human-readable explanation of why a pair matches
    pub fn explain(&self, student: &StudentProfile, alumni: &AlumniProfile) -> String {
        let score = self.calculate_score(student, alumni);
        describe(&score.breakdown, alumni)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
