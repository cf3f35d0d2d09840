use crate::models::{ListingCandidate, UserPreferences};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Listing status the marketplace considers open for matching
const LISTING_STATUS_ACTIVE: &str = "Active";

/// Errors that can occur when interacting with the marketplace API
#[derive(Debug, Error)]
pub enum MarketplaceError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Marketplace internal API client
///
/// Handles all communication with the marketplace backend including:
/// - Fetching user preferences
/// - Querying available listings for scoring
pub struct MarketplaceClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl MarketplaceClient {
    /// Create a new marketplace client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch stored preferences for a given user ID
    pub async fn get_preferences(
        &self,
        user_id: &str,
    ) -> Result<UserPreferences, MarketplaceError> {
        let url = format!(
            "{}/internal/users/{}/preferences",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(user_id)
        );

        tracing::debug!("Fetching preferences from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketplaceError::NotFound(format!(
                "Preferences not found for user {}",
                user_id
            )));
        }

        if !response.status().is_success() {
            return Err(MarketplaceError::ApiError(format!(
                "Failed to fetch preferences: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        // Preferences may arrive wrapped in a data envelope or as a bare object
        let data = json.get("data").unwrap_or(&json);

        serde_json::from_value(data.clone()).map_err(|e| {
            MarketplaceError::InvalidResponse(format!("Failed to parse preferences: {}", e))
        })
    }

    /// Query listings that are available and open for matching
    ///
    /// Availability filtering happens marketplace-side; every listing returned
    /// here goes straight into scoring. Entries that fail to parse are skipped.
    pub async fn query_active_listings(
        &self,
    ) -> Result<Vec<ListingCandidate>, MarketplaceError> {
        let url = format!(
            "{}/internal/listings?available=true&status={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(LISTING_STATUS_ACTIVE)
        );

        tracing::debug!("Querying active listings from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MarketplaceError::ApiError(format!(
                "Failed to query listings: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let listings = json
            .get("listings")
            .and_then(|l| l.as_array())
            .ok_or_else(|| MarketplaceError::InvalidResponse("Missing listings array".into()))?;

        let candidates: Vec<ListingCandidate> = listings
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect();

        tracing::debug!(
            "Queried {} candidate listings (total: {})",
            candidates.len(),
            total
        );

        Ok(candidates)
    }

    /// Probe the marketplace health endpoint
    pub async fn health_check(&self) -> Result<bool, MarketplaceError> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;

        Ok(response.status().is_success())
    }
}
