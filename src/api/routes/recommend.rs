//! Recommendation Routes
//!
//! - POST /api/v1/recommendations - Coping strategies for a 1-5 score

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{RecommendationRequest, RecommendationResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::recommend::recommend;

/// POST /api/v1/recommendations
///
/// Build coping recommendations for a self-reported 1-5 mood score.
/// Low scores additionally carry support resources.
pub async fn get_recommendations(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<RecommendationRequest>,
) -> ApiResult<Json<RecommendationResponse>> {
    let score = req.mood_score.ok_or_else(|| {
        ApiError::Validation("mood_score must be an integer between 1 and 5".to_string())
    })?;

    let recommendation = recommend(score)?;

    tracing::debug!(mood_score = score, category = %recommendation.category, "Recommendation served");

    Ok(Json(RecommendationResponse {
        status: "success".to_string(),
        recommendation,
    }))
}
