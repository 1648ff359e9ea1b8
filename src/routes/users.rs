use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{activity_status, platform_stats, user_analytics};
use crate::models::{AnalyticsResponse, LoginRequest, UpdateUserRequest};
use super::{marketplace_error_response, validation_error_response, AppState};

/// Configure all user-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users/login", web::post().to(login))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}", web::patch().to(update_user))
        .route("/users/{id}/analytics", web::get().to(get_analytics));
}

/// Sign in with a university email
///
/// POST /api/v1/users/login
///
/// Request body:
/// ```json
/// { "email": "jane.doe@university.edu" }
/// ```
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Rejected login request: {:?}", errors);
        return validation_error_response(errors);
    }

    match state.store.login(&req.email).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            tracing::info!("Login refused for {}: {}", req.email, e);
            marketplace_error_response(&e)
        }
    }
}

async fn get_user(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.store.user(&path).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => marketplace_error_response(&e),
    }
}

/// Partially update a profile
///
/// PATCH /api/v1/users/{id}
async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    match state.store.update_user(&path, req.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            tracing::warn!("Failed to update user {}: {}", path, e);
            marketplace_error_response(&e)
        }
    }
}

/// Personal and platform analytics
///
/// GET /api/v1/users/{id}/analytics
async fn get_analytics(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user = match state.store.user(&path).await {
        Ok(user) => user,
        Err(e) => return marketplace_error_response(&e),
    };

    let users = state.store.users().await;
    let skills = state.store.skills().await;
    let now = chrono::Utc::now();

    HttpResponse::Ok().json(AnalyticsResponse {
        user: user_analytics(&user, &skills, &users),
        platform: platform_stats(&users, &skills, now),
        activity_status: activity_status(user.last_active, now),
    })
}
