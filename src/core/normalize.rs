use crate::models::{AlumniProfile, StudentProfile};
use std::collections::BTreeSet;

/// Normalize a single value for comparison
#[inline]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Normalize a list of values into an ordered set
pub fn normalize_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(|v| normalize(v.as_ref())).collect()
}

/// Two normalized values match only when both are present and equal
#[inline]
pub fn values_match(left: &str, right: &str) -> bool {
    !left.is_empty() && left == right
}

/// Sorted overlap of two normalized sets
pub fn intersection(left: &BTreeSet<String>, right: &BTreeSet<String>) -> Vec<String> {
    left.intersection(right).cloned().collect()
}

/// Comparison keys of a student, lower-cased once at ingestion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentKeys {
    pub university: String,
    pub degree: String,
    pub preferred_industry: String,
    pub company: String,
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
    pub looking_for: BTreeSet<String>,
}

impl From<&StudentProfile> for StudentKeys {
    fn from(student: &StudentProfile) -> Self {
        Self {
            university: normalize(&student.university),
            degree: normalize(&student.degree),
            preferred_industry: normalize(
                student.preferred_industry.as_deref().unwrap_or_default(),
            ),
            company: normalize(student.company.as_deref().unwrap_or_default()),
            skills: normalize_set(&student.skills),
            interests: normalize_set(&student.interests),
            looking_for: normalize_set(&student.looking_for),
        }
    }
}

/// Comparison keys of an alumni, lower-cased once at ingestion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlumniKeys {
    pub university: String,
    pub degree: String,
    pub industry: String,
    pub company: String,
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
    pub mentoring_areas: BTreeSet<String>,
    pub available: bool,
}

impl From<&AlumniProfile> for AlumniKeys {
    fn from(alumni: &AlumniProfile) -> Self {
        Self {
            university: normalize(&alumni.university),
            degree: normalize(&alumni.degree),
            industry: normalize(&alumni.industry),
            company: normalize(&alumni.company),
            skills: normalize_set(&alumni.skills),
            interests: normalize_set(&alumni.interests),
            mentoring_areas: normalize_set(&alumni.mentoring_areas),
            // Availability stays case-sensitive
            available: alumni.is_available(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_set_dedupes_case_variants() {
        let set = normalize_set(["Python", "python", "PYTHON", "Go"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("python"));
        assert!(set.contains("go"));
    }

    #[test]
    fn test_empty_values_never_match() {
        assert!(!values_match("", ""));
        assert!(!values_match("mit", ""));
        assert!(values_match("mit", "mit"));
    }

    #[test]
    fn test_intersection_sorted() {
        let left = normalize_set(["Rust", "Go", "ML"]);
        let right = normalize_set(["ml", "rust", "java"]);
        assert_eq!(intersection(&left, &right), vec!["ml", "rust"]);
    }

    #[test]
    fn test_student_keys_default_optional_fields() {
        let student = StudentProfile {
            university: "MIT".to_string(),
            ..Default::default()
        };
        let keys = StudentKeys::from(&student);

        assert_eq!(keys.university, "mit");
        assert!(keys.preferred_industry.is_empty());
        assert!(keys.company.is_empty());
    }

    #[test]
    fn test_alumni_availability_case_sensitive() {
        let mut alumni = AlumniProfile {
            availability: "available".to_string(),
            ..Default::default()
        };
        assert!(!AlumniKeys::from(&alumni).available);

        alumni.availability = "Available".to_string();
        assert!(AlumniKeys::from(&alumni).available);
    }
}
