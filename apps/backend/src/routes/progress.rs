//! Progress endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;
use vocab_core::progress::WORDS_PER_LEVEL;
use vocab_core::{level_completion_percent, Level};

/// POST /api/progress
///
/// Records the caller-reported checkpoint and overwrites the stored entry
/// for that user.
pub async fn checkpoint(
    State(state): State<AppState>,
    Json(request): Json<ProgressCheckpointRequest>,
) -> Result<Json<serde_json::Value>> {
    let mut record = state
        .progress
        .get(&request.user_id)
        .unwrap_or_default();
    record.current_level = Some(request.level);
    record.last_session_completed = Some(request.completed);
    state.progress.put(&request.user_id, record);

    tracing::debug!(user_id = %request.user_id, level = %request.level.as_str(), "progress checkpoint");
    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /api/progress/:user_id
///
/// Returns the stored progress object, or an empty object for a user with
/// no recorded progress yet.
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    match state.progress.get(&user_id) {
        Some(progress) => Ok(Json(serde_json::to_value(progress)?)),
        None => Ok(Json(serde_json::json!({}))),
    }
}

/// GET /api/progress/:user_id/levels
pub async fn levels(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<LevelProgressResponse>> {
    let progress = state.progress.get(&user_id).unwrap_or_default();

    let levels = Level::all()
        .into_iter()
        .map(|level| LevelCompletion {
            level,
            learned: progress.level_progress.get(&level).copied().unwrap_or(0),
            target: WORDS_PER_LEVEL,
            percent: level_completion_percent(&progress, level),
        })
        .collect();

    Ok(Json(LevelProgressResponse { user_id, levels }))
}

/// DELETE /api/progress/:user_id
pub async fn reset(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.progress.remove(&user_id);
    if deleted {
        tracing::info!(user_id = %user_id, "progress reset");
    }
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
