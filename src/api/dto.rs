//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::analytics::{AverageMood, DailySummary, Trend, WeeklySummary};
use crate::recommend::Recommendation;
use crate::store::{MoodEntry, UserLog};
use std::collections::BTreeMap;

// ============================================
// ENTRY DTOs
// ============================================

/// Create a mood entry
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    /// Owner of the entry
    pub user_id: String,
    /// ISO-8601 calendar date the mood applies to
    pub date: String,
    /// Raw mood label
    pub mood: String,
    /// Optional journal body
    #[serde(default)]
    pub journal_text: String,
}

/// Response to a created entry
#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    /// Status: "success"
    pub status: String,
    /// The entry as persisted, with its generated id and category
    pub new_entry: MoodEntry,
}

/// Update an existing entry's mood and journal text
#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    pub mood: String,
    #[serde(default)]
    pub journal_text: String,
}

/// Response to an updated entry
#[derive(Debug, Serialize)]
pub struct UpdateEntryResponse {
    pub status: String,
    pub updated_entry: MoodEntry,
}

/// Response to a deleted entry
#[derive(Debug, Serialize)]
pub struct DeleteEntryResponse {
    pub status: String,
    pub message: String,
}

/// Full log for a user, with the derived average-mood label
#[derive(Debug, Serialize)]
pub struct MoodLogResponse {
    pub status: String,
    pub user_id: String,
    pub mood_entries: UserLog,
    pub average_mood: AverageMood,
    pub total_entries: usize,
}

// ============================================
// SUMMARY & TREND DTOs
// ============================================

/// Marker body for requests that matched no entries.
///
/// Served with 200: absence of data is a result, not an error.
#[derive(Debug, Serialize)]
pub struct NoEntriesResponse {
    /// Status: "no_entries"
    pub status: String,
    pub message: String,
}

impl NoEntriesResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "no_entries".to_string(),
            message: message.into(),
        }
    }
}

/// Query parameters for the daily summary
#[derive(Debug, Deserialize)]
pub struct DailySummaryParams {
    pub user_id: String,
    pub date: String,
}

/// Daily summary response
#[derive(Debug, Serialize)]
pub struct DailySummaryResponse {
    pub status: String,
    pub user_id: String,
    #[serde(flatten)]
    pub summary: DailySummary,
}

/// Query parameters carrying only a user id
#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub user_id: String,
}

/// Weekly summary response
#[derive(Debug, Serialize)]
pub struct WeeklySummaryResponse {
    pub status: String,
    pub user_id: String,
    pub weekly_data: WeeklySummary,
}

/// Trend report response
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub status: String,
    pub user_id: String,
    pub trend: Trend,
    pub daily_scores: BTreeMap<String, f64>,
    pub first_half_avg: f64,
    pub second_half_avg: f64,
}

/// Marker body for users without enough recorded days
#[derive(Debug, Serialize)]
pub struct InsufficientDataResponse {
    /// Status: "insufficient_data"
    pub status: String,
    pub message: String,
}

// ============================================
// RECOMMENDATION DTOs
// ============================================

/// Ask for recommendations for a 1-5 mood score
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub mood_score: Option<i64>,
    #[serde(default)]
    #[allow(dead_code)]
    pub user_id: Option<String>,
}

/// Recommendation response
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: String,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Store status: "ok" or "error"
    pub store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
