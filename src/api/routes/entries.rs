//! Entry Routes
//!
//! Endpoints for the mood entry lifecycle.
//!
//! - POST /api/v1/moods - Log a new entry
//! - GET /api/v1/moods/:user_id - Full log with average-mood label
//! - PATCH /api/v1/moods/:user_id/:entry_id - Update an entry
//! - DELETE /api/v1/moods/:user_id/:entry_id - Delete an entry

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::analytics::average_mood;
use crate::api::dto::{
    CreateEntryRequest, CreateEntryResponse, DeleteEntryResponse, MoodLogResponse,
    UpdateEntryRequest, UpdateEntryResponse,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /api/v1/moods
///
/// Log a new mood entry. The entry id and category are computed
/// server-side; the persisted entry is echoed back.
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEntryRequest>,
) -> ApiResult<(StatusCode, Json<CreateEntryResponse>)> {
    let entry = state
        .journal
        .create(&req.user_id, &req.date, &req.mood, &req.journal_text)
        .await?;

    tracing::info!(user_id = %req.user_id, entry_id = %entry.entry_id, "Mood entry created");

    Ok((
        StatusCode::CREATED,
        Json(CreateEntryResponse {
            status: "success".to_string(),
            new_entry: entry,
        }),
    ))
}

/// GET /api/v1/moods/:user_id
///
/// Retrieve a user's full log and the overall average-mood label derived
/// from it.
pub async fn get_mood_log(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<MoodLogResponse>> {
    let entries = state.journal.read(&user_id).await?;
    let average = average_mood(&entries);

    Ok(Json(MoodLogResponse {
        status: "success".to_string(),
        user_id,
        total_entries: entries.len(),
        average_mood: average,
        mood_entries: entries,
    }))
}

/// PATCH /api/v1/moods/:user_id/:entry_id
///
/// Overwrite an entry's mood and journal text. The category is recomputed;
/// date and id are immutable.
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path((user_id, entry_id)): Path<(String, String)>,
    Json(req): Json<UpdateEntryRequest>,
) -> ApiResult<Json<UpdateEntryResponse>> {
    let entry = state
        .journal
        .update(&user_id, &entry_id, &req.mood, &req.journal_text)
        .await?;

    tracing::info!(user_id = %user_id, entry_id = %entry_id, "Mood entry updated");

    Ok(Json(UpdateEntryResponse {
        status: "success".to_string(),
        updated_entry: entry,
    }))
}

/// DELETE /api/v1/moods/:user_id/:entry_id
///
/// Remove an entry. Deleting an id that does not exist is a success.
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path((user_id, entry_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteEntryResponse>> {
    state.journal.delete(&user_id, &entry_id).await?;

    tracing::info!(user_id = %user_id, entry_id = %entry_id, "Mood entry deleted");

    Ok(Json(DeleteEntryResponse {
        status: "success".to_string(),
        message: "Entry deleted".to_string(),
    }))
}
