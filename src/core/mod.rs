// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::filter_ranked;
pub use matcher::{MatchResult, Matcher};
pub use scoring::{normalize_skill_name, score_profiles};
