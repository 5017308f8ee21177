use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Student profile submitted for matching
///
/// Only the scoring fields influence the result; identity fields are passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StudentProfile {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "userId", alias = "user_id", default)]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub university: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub preferred_industry: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub looking_for: Vec<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Alumni profile considered as a mentor candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AlumniProfile {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "userId", alias = "user_id", default)]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub university: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub degree: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub mentoring_areas: Vec<String>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Availability value that earns the availability bonus. Compared case-sensitively.
pub const AVAILABLE: &str = "Available";

impl AlumniProfile {
    pub fn is_available(&self) -> bool {
        self.availability == AVAILABLE
    }
}

/// Scoring categories in their fixed evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    University,
    Industry,
    Degree,
    Skills,
    Interests,
    Mentoring,
    Company,
    Availability,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::University,
        Category::Industry,
        Category::Degree,
        Category::Skills,
        Category::Interests,
        Category::Mentoring,
        Category::Company,
        Category::Availability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::University => "university",
            Category::Industry => "industry",
            Category::Degree => "degree",
            Category::Skills => "skills",
            Category::Interests => "interests",
            Category::Mentoring => "mentoring",
            Category::Company => "company",
            Category::Availability => "availability",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category contributions for one student/alumni pair
///
/// The common_* lists hold the lower-cased overlapping elements in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub university: u32,
    pub industry: u32,
    pub degree: u32,
    pub skills: u32,
    pub interests: u32,
    pub mentoring: u32,
    pub company: u32,
    pub availability: u32,
    pub common_skills: Vec<String>,
    pub common_interests: Vec<String>,
    pub matching_areas: Vec<String>,
}

impl ScoreBreakdown {
    /// Contribution of a single category
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::University => self.university,
            Category::Industry => self.industry,
            Category::Degree => self.degree,
            Category::Skills => self.skills,
            Category::Interests => self.interests,
            Category::Mentoring => self.mentoring,
            Category::Company => self.company,
            Category::Availability => self.availability,
        }
    }

    /// Iterate `(category, contribution)` pairs in category order
    pub fn contributions(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Sum of all eight contributions
    ///
    /// Exact whenever the sum fits in `u32`; saturates at `u32::MAX` otherwise.
    pub fn total(&self) -> u32 {
        self.contributions()
            .fold(0u32, |total, (_, points)| total.saturating_add(points))
    }

    pub fn is_empty(&self) -> bool {
        self.contributions().all(|(_, points)| points == 0)
    }
}

/// Total score together with its breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
}

impl From<ScoreBreakdown> for MatchScore {
    fn from(breakdown: ScoreBreakdown) -> Self {
        Self {
            total_score: breakdown.total(),
            breakdown,
        }
    }
}

/// One scored alumni in a student's ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub alumni_id: String,
    pub alumni_name: String,
    pub company: String,
    pub industry: String,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub mentoring_areas: Vec<String>,
    pub availability: String,
    pub total_score: u32,
    pub score_breakdown: ScoreBreakdown,
}

impl Recommendation {
    pub fn new(alumni: &AlumniProfile, score: MatchScore) -> Self {
        Self {
            alumni_id: alumni.user_id.clone(),
            alumni_name: alumni.name.clone(),
            company: alumni.company.clone(),
            industry: alumni.industry.clone(),
            location: alumni.location.clone(),
            skills: alumni.skills.clone(),
            interests: alumni.interests.clone(),
            mentoring_areas: alumni.mentoring_areas.clone(),
            availability: alumni.availability.clone(),
            total_score: score.total_score,
            score_breakdown: score.breakdown,
        }
    }
}

/// Ranked recommendations for one student of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecommendations {
    pub student_id: String,
    pub student_name: String,
    pub matches: Vec<Recommendation>,
    pub match_count: usize,
}

/// Scoring weights
///
/// Per-element weights (skill, interest, mentoring) are multiplied by the size of the
/// corresponding intersection; the rest are flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub university: u32,
    pub industry: u32,
    pub degree: u32,
    pub skill: u32,
    pub interest: u32,
    pub mentoring: u32,
    pub company: u32,
    pub availability: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            university: 200,
            industry: 160,
            degree: 100,
            skill: 90,
            interest: 70,
            mentoring: 50,
            company: 50,
            availability: 50,
        }
    }
}
