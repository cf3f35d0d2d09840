//! Rentora Algo - High-performance property matching service for the Rentora rental marketplace
//!
//! This library provides the matching algorithm used by the Rentora platform to pair
//! users with compatible property listings. Candidate listings are scored against the
//! user's stored preferences across eight weighted categories and returned best-first.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, MatchResult, Matcher};
pub use crate::models::{
    BudgetRange, CategoryWeights, FindMatchesRequest, ListingCandidate, MatchResponse,
    RoommatePreferences, ScoredListing, UserPreferences,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let weights = CategoryWeights::default();
        assert_eq!(weights.total(), 100.0);
    }
}
