// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::{MatchResult, Matcher};
pub use scoring::calculate_match_score;
