use crate::models::domain::{ScoredListing, UserPreferences};
use serde::{Deserialize, Serialize};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<ScoredListing>,
    #[serde(rename = "userPreferences")]
    pub user_preferences: UserPreferences,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
