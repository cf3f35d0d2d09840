use crate::core::scoring::calculate_match_score;
use crate::models::{CategoryWeights, ListingCandidate, ScoredListing, UserPreferences};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredListing>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// Scores every candidate listing against the user's preferences, ranks by
/// the rounded integer score and keeps the best `limit` entries. Candidates
/// arrive pre-filtered to available, active listings; the matcher never
/// re-filters or drops low scorers.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: CategoryWeights,
}

impl Matcher {
    pub fn new(weights: CategoryWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: CategoryWeights::default(),
        }
    }

    /// Score and rank candidate listings for a user
    ///
    /// # Arguments
    /// * `preferences` - The user's accommodation preferences
    /// * `candidates` - Available, active listings from the marketplace
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult containing scored listings, best first. Equal scores keep
    /// their relative input order; there is no secondary sort key.
    pub fn find_matches(
        &self,
        preferences: &UserPreferences,
        candidates: Vec<ListingCandidate>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredListing> = candidates
            .into_iter()
            .map(|listing| {
                let raw_score = calculate_match_score(&listing, preferences, &self.weights);

                // Round half away from zero, so e.g. 72.5 becomes 73
                let matching_score = raw_score.round() as u8;

                ScoredListing {
                    id: listing.id,
                    price: listing.price,
                    area: listing.area,
                    amenities: listing.amenities,
                    available_from: listing.available_from,
                    minimum_stay_months: listing.minimum_stay_months,
                    maximum_stay_months: listing.maximum_stay_months,
                    billing_cycle: listing.billing_cycle,
                    roommate_preferences: listing.roommate_preferences,
                    matching_score,
                }
            })
            .collect();

        // Stable sort on the rounded score (descending); ties retain the
        // candidate pool's order
        matches.sort_by(|a, b| b.matching_score.cmp(&a.matching_score));

        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
