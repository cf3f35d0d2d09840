// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, CategoryWeights, ListingCandidate, RoommatePreferences, ScoredListing,
    UserPreferences,
};
pub use requests::FindMatchesRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchResponse};
