//! Trend Routes
//!
//! - GET /api/v1/trend?user_id=... - 14-day mood trend signal

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::analytics::TrendOutcome;
use crate::api::dto::{InsufficientDataResponse, NoEntriesResponse, TrendResponse, UserParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/trend
///
/// Detect the user's mood trend over the trailing 14 calendar days.
/// Users with no entries get `no_entries`; fewer than three recorded days
/// gets `insufficient_data`. Both are 200 bodies, not errors.
pub async fn get_trend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
) -> ApiResult<Response> {
    tracing::debug!(user_id = %params.user_id, "Trend analysis requested");

    let outcome = state.analytics.trend(&params.user_id).await?;

    let response = match outcome {
        None => Json(NoEntriesResponse::new("No mood logs found for this user."))
            .into_response(),
        Some(TrendOutcome::InsufficientData) => Json(InsufficientDataResponse {
            status: "insufficient_data".to_string(),
            message: "Not enough data to determine trend.".to_string(),
        })
        .into_response(),
        Some(TrendOutcome::Detected(report)) => Json(TrendResponse {
            status: "success".to_string(),
            user_id: params.user_id,
            trend: report.trend,
            daily_scores: report.daily_scores,
            first_half_avg: report.first_half_avg,
            second_half_avg: report.second_half_avg,
        })
        .into_response(),
    };

    Ok(response)
}
