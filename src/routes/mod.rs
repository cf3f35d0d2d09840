// Route exports
pub mod matches;

use actix_web::web;

/// Mount all versioned API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(matches::configure));
}
