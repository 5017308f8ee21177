use crate::core::normalize::{intersection, values_match, AlumniKeys, StudentKeys};
use crate::models::{MatchScore, ScoreBreakdown, ScoringWeights};

/// Calculate the hierarchical match score for a normalized student/alumni pair
///
/// Hierarchy:
/// - Level 0, exact matches: university, industry, degree
/// - Level 1, skill bridges: common skills and interests, weighted per element
/// - Level 2, mentoring: looking_for against mentoring_areas, weighted per element
/// - Additional: company (only when the alumni lists one) and availability
pub fn calculate_score(
    student: &StudentKeys,
    alumni: &AlumniKeys,
    weights: &ScoringWeights,
) -> MatchScore {
    let common_skills = intersection(&student.skills, &alumni.skills);
    let common_interests = intersection(&student.interests, &alumni.interests);
    let matching_areas = intersection(&student.looking_for, &alumni.mentoring_areas);

    let breakdown = ScoreBreakdown {
        university: flat(
            values_match(&student.university, &alumni.university),
            weights.university,
        ),
        // preferred_industry is the student's wish, industry is where the alumni works
        industry: flat(
            values_match(&student.preferred_industry, &alumni.industry),
            weights.industry,
        ),
        degree: flat(values_match(&student.degree, &alumni.degree), weights.degree),
        skills: per_element(common_skills.len(), weights.skill),
        interests: per_element(common_interests.len(), weights.interest),
        mentoring: per_element(matching_areas.len(), weights.mentoring),
        company: flat(values_match(&alumni.company, &student.company), weights.company),
        availability: flat(alumni.available, weights.availability),
        common_skills,
        common_interests,
        matching_areas,
    };

    MatchScore::from(breakdown)
}

#[inline]
fn flat(matched: bool, weight: u32) -> u32 {
    if matched { weight } else { 0 }
}

/// Saturates instead of wrapping when the weights are unbounded
#[inline]
fn per_element(count: usize, weight: u32) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlumniProfile, StudentProfile};

    fn keys(student: &StudentProfile, alumni: &AlumniProfile) -> (StudentKeys, AlumniKeys) {
        (StudentKeys::from(student), AlumniKeys::from(alumni))
    }

    #[test]
    fn test_reference_pair() {
        let student = StudentProfile {
            university: "MIT".to_string(),
            degree: "BS".to_string(),
            skills: vec!["python".to_string(), "ml".to_string()],
            ..Default::default()
        };
        let alumni = AlumniProfile {
            university: "mit".to_string(),
            degree: "bs".to_string(),
            skills: vec!["Python".to_string(), "Go".to_string()],
            availability: "Available".to_string(),
            ..Default::default()
        };
        let (s, a) = keys(&student, &alumni);

        let score = calculate_score(&s, &a, &ScoringWeights::default());

        assert_eq!(score.breakdown.university, 200);
        assert_eq!(score.breakdown.industry, 0);
        assert_eq!(score.breakdown.degree, 100);
        assert_eq!(score.breakdown.skills, 90);
        assert_eq!(score.breakdown.common_skills, vec!["python"]);
        assert_eq!(score.breakdown.availability, 50);
        assert_eq!(score.total_score, 440);
    }

    #[test]
    fn test_industry_uses_preferred_industry() {
        let student = StudentProfile {
            preferred_industry: Some("Technology".to_string()),
            ..Default::default()
        };
        let alumni = AlumniProfile {
            industry: "TECHNOLOGY".to_string(),
            ..Default::default()
        };
        let (s, a) = keys(&student, &alumni);

        let score = calculate_score(&s, &a, &ScoringWeights::default());
        assert_eq!(score.breakdown.industry, 160);
        assert_eq!(score.total_score, 160);
    }

    #[test]
    fn test_company_requires_alumni_company() {
        let student = StudentProfile {
            company: Some(String::new()),
            ..Default::default()
        };
        let alumni = AlumniProfile::default();
        let (s, a) = keys(&student, &alumni);
        let score = calculate_score(&s, &a, &ScoringWeights::default());
        assert_eq!(score.breakdown.company, 0);

        let student = StudentProfile {
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        let alumni = AlumniProfile {
            company: "acme".to_string(),
            ..Default::default()
        };
        let (s, a) = keys(&student, &alumni);
        let score = calculate_score(&s, &a, &ScoringWeights::default());
        assert_eq!(score.breakdown.company, 50);
    }

    #[test]
    fn test_per_element_weights() {
        let student = StudentProfile {
            interests: vec!["AI".to_string(), "Web".to_string(), "Music".to_string()],
            looking_for: vec!["Career Advice".to_string(), "Interview Prep".to_string()],
            ..Default::default()
        };
        let alumni = AlumniProfile {
            interests: vec!["ai".to_string(), "web".to_string()],
            mentoring_areas: vec!["career advice".to_string()],
            ..Default::default()
        };
        let (s, a) = keys(&student, &alumni);

        let score = calculate_score(&s, &a, &ScoringWeights::default());
        assert_eq!(score.breakdown.interests, 140);
        assert_eq!(score.breakdown.common_interests, vec!["ai", "web"]);
        assert_eq!(score.breakdown.mentoring, 50);
        assert_eq!(score.breakdown.matching_areas, vec!["career advice"]);
        assert_eq!(score.total_score, 190);
    }

    #[test]
    fn test_empty_profiles_score_zero() {
        let (s, a) = keys(&StudentProfile::default(), &AlumniProfile::default());
        let score = calculate_score(&s, &a, &ScoringWeights::default());

        assert_eq!(score.total_score, 0);
        assert!(score.breakdown.is_empty());
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            university: 1,
            skill: 10,
            ..ScoringWeights::default()
        };
        let student = StudentProfile {
            university: "Stanford".to_string(),
            skills: vec!["rust".to_string(), "go".to_string()],
            ..Default::default()
        };
        let alumni = AlumniProfile {
            university: "stanford".to_string(),
            skills: vec!["Rust".to_string(), "Go".to_string()],
            ..Default::default()
        };
        let (s, a) = keys(&student, &alumni);

        let score = calculate_score(&s, &a, &weights);
        assert_eq!(score.breakdown.university, 1);
        assert_eq!(score.breakdown.skills, 20);
        assert_eq!(score.total_score, 21);
    }

    #[test]
    fn test_oversized_weights_saturate() {
        let weights = ScoringWeights {
            university: u32::MAX / 2,
            skill: u32::MAX / 2,
            ..ScoringWeights::default()
        };
        let student = StudentProfile {
            university: "MIT".to_string(),
            skills: vec!["rust".to_string(), "go".to_string()],
            ..Default::default()
        };
        let alumni = AlumniProfile {
            university: "MIT".to_string(),
            skills: vec!["rust".to_string(), "go".to_string()],
            ..Default::default()
        };
        let (s, a) = keys(&student, &alumni);

        let score = calculate_score(&s, &a, &weights);
        assert_eq!(score.breakdown.skills, u32::MAX - 1);
        assert_eq!(score.total_score, u32::MAX);
    }
}
