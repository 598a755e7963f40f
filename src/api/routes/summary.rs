//! Summary Routes
//!
//! Date-bucketed aggregation endpoints.
//!
//! - GET /api/v1/summary/daily?user_id=...&date=... - One calendar day
//! - GET /api/v1/summary/weekly?user_id=... - Trailing 7 days

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    DailySummaryParams, DailySummaryResponse, NoEntriesResponse, UserParams,
    WeeklySummaryResponse,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/summary/daily
///
/// Summarize a user's entries for one date. A date with no matching
/// entries yields a 200 `no_entries` body, not an error.
pub async fn daily_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DailySummaryParams>,
) -> ApiResult<Response> {
    tracing::debug!(user_id = %params.user_id, date = %params.date, "Daily summary requested");

    let summary = state
        .analytics
        .daily_summary(&params.user_id, &params.date)
        .await?;

    let response = match summary {
        Some(summary) => Json(DailySummaryResponse {
            status: "success".to_string(),
            user_id: params.user_id,
            summary,
        })
        .into_response(),
        None => Json(NoEntriesResponse::new("No mood entries found for this date."))
            .into_response(),
    };

    Ok(response)
}

/// GET /api/v1/summary/weekly
///
/// Per-day breakdown of the trailing 7 calendar days, today included.
/// All 7 buckets are always present; a user with no entries at all gets
/// the `no_entries` body instead.
pub async fn weekly_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserParams>,
) -> ApiResult<Response> {
    tracing::debug!(user_id = %params.user_id, "Weekly summary requested");

    let week = state.analytics.weekly_summary(&params.user_id).await?;

    let response = match week {
        Some(weekly_data) => Json(WeeklySummaryResponse {
            status: "success".to_string(),
            user_id: params.user_id,
            weekly_data,
        })
        .into_response(),
        None => Json(NoEntriesResponse::new("No mood logs found for this user."))
            .into_response(),
    };

    Ok(response)
}
