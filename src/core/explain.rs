use crate::models::{AlumniProfile, Category, ScoreBreakdown};

/// Explanation used when no category contributed
pub const FALLBACK_EXPLANATION: &str = "General profile compatibility";

const REASON_SEPARATOR: &str = " | ";
const MAX_SKILLS_SHOWN: usize = 3;
const MAX_INTERESTS_SHOWN: usize = 2;
const MAX_AREAS_SHOWN: usize = 2;

/// Render a breakdown as a human-readable explanation
///
/// One fragment per category with a nonzero contribution, in category order.
pub fn describe(breakdown: &ScoreBreakdown, alumni: &AlumniProfile) -> String {
    let reasons: Vec<String> = breakdown
        .contributions()
        .filter(|(_, points)| *points > 0)
        .map(|(category, _)| reason(category, breakdown, alumni))
        .collect();

    if reasons.is_empty() {
        FALLBACK_EXPLANATION.to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    }
}

fn reason(category: Category, breakdown: &ScoreBreakdown, alumni: &AlumniProfile) -> String {
    match category {
        Category::University => format!("Same university: {}", alumni.university),
        Category::Industry => format!("Industry match: {}", alumni.industry),
        Category::Degree => "Similar degree background".to_string(),
        Category::Skills => {
            let mut skills = head(&breakdown.common_skills, MAX_SKILLS_SHOWN);
            if breakdown.common_skills.len() > MAX_SKILLS_SHOWN {
                let hidden = breakdown.common_skills.len() - MAX_SKILLS_SHOWN;
                skills.push_str(&format!(" +{}", hidden));
            }
            format!("Shared skills: {}", skills)
        }
        Category::Interests => format!(
            "Common interests: {}",
            head(&breakdown.common_interests, MAX_INTERESTS_SHOWN)
        ),
        Category::Mentoring => format!(
            "Can help with: {}",
            head(&breakdown.matching_areas, MAX_AREAS_SHOWN)
        ),
        Category::Company => format!("Same company: {}", alumni.company),
        Category::Availability => "Available for mentorship".to_string(),
    }
}

fn head(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
