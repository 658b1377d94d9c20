use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{Recommender, DEFAULT_LIMIT};
use crate::models::{ErrorResponse, HealthResponse, RecommendRequest};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            recommender: Recommender::with_defaults(),
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_LIMIT,
        }
    }
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank destinations for a group
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "users": [{"budget_max": 2000, "preferred_activities": "beach,hiking"}],
///   "destinations": [{"name": "Coastal Park", "type": "Beach", "price_min": 100}],
///   "limit": 10
/// }
/// ```
///
/// The response body is the ranked array of destination records, each with a
/// `similarity` field added. Absent or empty `users`/`destinations` produce
/// an empty array.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    let RecommendRequest {
        users,
        destinations,
        ..
    } = req.into_inner();

    tracing::info!(
        "Scoring {} destinations for a group of {} users (limit: {})",
        destinations.len(),
        users.len(),
        limit
    );

    let result = state.recommender.recommend(&users, destinations, limit);

    tracing::info!(
        "Returning {} recommendations (from {} destinations)",
        result.recommendations.len(),
        result.total_destinations
    );

    HttpResponse::Ok().json(result.recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn test_app_state() -> AppState {
        AppState::default()
    }

    #[actix_web::test]
    async fn test_recommend_returns_ranked_array() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state()))
                .configure(configure),
        )
        .await;

        let payload = json!({
            "users": [{"preferred_activities": "beach,hiking", "budget_max": 2000}],
            "destinations": [
                {"name": "City Museum", "type": "Museum", "price_min": 50},
                {"name": "Sunny Beach", "type": "Beach", "price_min": 100}
            ]
        });

        let req = test::TestRequest::post()
            .uri("/recommendations")
            .set_json(&payload)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let results = body.as_array().expect("response should be an array");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["name"], json!("Sunny Beach"));
        assert!(results[0]["similarity"].as_f64().unwrap() >= results[1]["similarity"].as_f64().unwrap());
    }

    #[actix_web::test]
    async fn test_recommend_empty_users_returns_empty_array() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommendations")
            .set_json(json!({"destinations": [{"name": "Sunny Beach"}]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_recommend_rejects_out_of_range_limit() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommendations")
            .set_json(json!({"users": [], "destinations": [], "limit": 0}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], json!("healthy"));
    }
}
