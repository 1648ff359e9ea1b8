use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::filter_and_sort;
use crate::models::{
    skill_categories, AddSkillRequest, BrowseQuery, BrowseResponse, RecommendationsQuery,
    RecommendationsResponse, SwapRequest, SwapResponse,
};
use super::{marketplace_error_response, validation_error_response, AppState};

/// Configure catalog, swap and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/categories", web::get().to(list_categories))
        .route("/skills", web::get().to(browse_skills))
        .route("/skills", web::post().to(add_skill))
        .route("/skills/{id}/swap", web::post().to(swap_skill))
        .route("/recommendations", web::get().to(recommendations));
}

async fn list_categories() -> impl Responder {
    HttpResponse::Ok().json(skill_categories())
}

/// Browse the catalog
///
/// GET /api/v1/skills?search=react&category=programming&difficulty=all
async fn browse_skills(
    state: web::Data<AppState>,
    query: web::Query<BrowseQuery>,
) -> impl Responder {
    let skills = state.store.skills().await;
    let visible = filter_and_sort(&skills, &query.search, &query.category, &query.difficulty);

    tracing::debug!(
        "Browse search={:?} category={} difficulty={} -> {} of {} skills",
        query.search,
        query.category,
        query.difficulty,
        visible.len(),
        skills.len()
    );

    HttpResponse::Ok().json(BrowseResponse {
        total_results: visible.len(),
        skills: visible,
    })
}

/// Publish a new listing
///
/// POST /api/v1/skills
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "title": "Advanced React Development",
///   "description": "string",
///   "credits": 3,
///   "categoryId": "programming",
///   "difficulty": "intermediate",
///   "duration": "2-3 hours",
///   "format": "one-on-one",
///   "tags": ["react", "frontend"]
/// }
/// ```
async fn add_skill(state: web::Data<AppState>, req: web::Json<AddSkillRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for add_skill request: {:?}", errors);
        return validation_error_response(errors);
    }

    match state.store.add_skill(req.into_inner()).await {
        Ok(skill) => HttpResponse::Created().json(skill),
        Err(e) => {
            tracing::warn!("Failed to add skill: {}", e);
            marketplace_error_response(&e)
        }
    }
}

/// Spend credits on a listing
///
/// POST /api/v1/skills/{id}/swap
///
/// Request body:
/// ```json
/// { "userId": "string" }
/// ```
async fn swap_skill(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SwapRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let result = state.store.swap_skill(&req.user_id, &path).await;

    match result {
        Ok((transaction, user)) => {
            // Simulated processing delay; the swap is already committed
            if !state.swap_latency.is_zero() {
                tokio::time::sleep(state.swap_latency).await;
            }

            HttpResponse::Ok().json(SwapResponse { transaction, user })
        }
        Err(e) => {
            tracing::info!("Swap of {} by {} refused: {}", path, req.user_id, e);
            marketplace_error_response(&e)
        }
    }
}

/// Personalised recommendations
///
/// GET /api/v1/recommendations?userId={userId}&limit=6
async fn recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error_response(errors);
    }

    let user = match state.store.user(&query.user_id).await {
        Ok(user) => user,
        Err(e) => return marketplace_error_response(&e),
    };

    let limit = query
        .limit
        .unwrap_or(state.recommendation_limit)
        .min(state.max_recommendation_limit);

    if !state.recommendation_latency.is_zero() {
        tokio::time::sleep(state.recommendation_latency).await;
    }

    let skills = state.store.skills().await;
    let mut matches = state.matcher.find_matches(&user, &skills);
    let total_results = matches.len();
    matches.truncate(limit);

    tracing::info!(
        "Returning {} recommendations for user {} (from {} matches, {} skills)",
        matches.len(),
        user.id,
        total_results,
        skills.len()
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        matches,
        total_results,
    })
}
