// Core algorithm exports
pub mod explain;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use explain::{describe, FALLBACK_EXPLANATION};
pub use matcher::Matcher;
pub use normalize::{normalize, normalize_set, AlumniKeys, StudentKeys};
pub use scoring::calculate_score;
