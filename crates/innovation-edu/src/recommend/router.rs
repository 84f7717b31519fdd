use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::{RecommendationError, RecommendationRequest, RecommendationService};

/// Router builder exposing the catalog and recommendation endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/models", get(list_models_handler))
        .route("/api/v1/archetypes", get(list_archetypes_handler))
        .route("/api/v1/recommendations", post(recommend_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListModelsQuery {
    pub(crate) q: Option<String>,
}

pub(crate) async fn list_models_handler(
    State(service): State<Arc<RecommendationService>>,
    Query(params): Query<ListModelsQuery>,
) -> Response {
    let models = service.list_models(params.q.as_deref());
    (StatusCode::OK, axum::Json(json!({ "models": models }))).into_response()
}

pub(crate) async fn list_archetypes_handler(
    State(service): State<Arc<RecommendationService>>,
) -> Response {
    let archetypes: Vec<_> = service.archetypes().iter().collect();
    (StatusCode::OK, axum::Json(json!({ "archetypes": archetypes }))).into_response()
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    match service.recommend(&request) {
        Ok(recommendation) => (StatusCode::OK, axum::Json(recommendation)).into_response(),
        Err(error @ RecommendationError::UnknownArchetype(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
