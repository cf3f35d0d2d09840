use crate::core::Matcher;
use crate::models::{ErrorResponse, FindMatchesRequest, HealthResponse, MatchResponse};
use crate::services::{MarketplaceClient, MarketplaceError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub marketplace: Arc<MarketplaceClient>,
    pub matcher: Matcher,
    pub match_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Check marketplace reachability
    let marketplace_healthy = state.marketplace.health_check().await.unwrap_or(false);

    let status = if marketplace_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;

    tracing::info!("Finding matches for user: {}", user_id);

    // Fetch user preferences from the marketplace
    let preferences = match state.marketplace.get_preferences(user_id).await {
        Ok(prefs) => prefs,
        Err(MarketplaceError::NotFound(message)) => {
            tracing::info!("No preferences stored for user {}", user_id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Preferences not found".to_string(),
                message,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch preferences for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch preferences".to_string(),
                message: "An unexpected error occurred".to_string(),
                status_code: 500,
            });
        }
    };

    // Query available listings from the marketplace
    let candidates = match state.marketplace.query_active_listings().await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to query listings for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to query listings".to_string(),
                message: "An unexpected error occurred".to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!(
        "Found {} candidate listings for {}",
        candidates.len(),
        user_id
    );

    // Run the matching algorithm
    let result = state
        .matcher
        .find_matches(&preferences, candidates, state.match_limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchResponse {
        matches: result.matches,
        user_preferences: preferences,
    })
}
