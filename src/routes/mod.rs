// Route exports
pub mod skills;
pub mod users;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use std::time::Duration;
use crate::core::SkillMatcher;
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{MarketplaceError, MarketplaceStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MarketplaceStore>,
    pub matcher: SkillMatcher,
    pub recommendation_limit: usize,
    pub max_recommendation_limit: usize,
    /// Simulated latency after a swap
    pub swap_latency: Duration,
    /// Simulated latency before recommendations are returned
    pub recommendation_latency: Duration,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(users::configure)
            .configure(skills::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Map a marketplace error onto an HTTP error body
pub(crate) fn marketplace_error_response(err: &MarketplaceError) -> HttpResponse {
    let (mut builder, error, status_code) = match err {
        MarketplaceError::UserNotFound(_) => (HttpResponse::NotFound(), "User not found", 404),
        MarketplaceError::SkillNotFound(_) => (HttpResponse::NotFound(), "Skill not found", 404),
        MarketplaceError::InvalidEmailDomain(_) => (HttpResponse::BadRequest(), "Invalid email", 400),
        MarketplaceError::UnknownCategory(_) => (HttpResponse::BadRequest(), "Invalid category", 400),
        MarketplaceError::InsufficientCredits { .. } => (HttpResponse::BadRequest(), "Insufficient credits", 400),
        MarketplaceError::OwnSkill => (HttpResponse::BadRequest(), "Invalid swap", 400),
    };

    builder.json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code,
    })
}

pub(crate) fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
