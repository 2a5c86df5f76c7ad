//! Word lookup endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/words
///
/// Unfiltered fields pass through; an unknown level or category matches
/// nothing and yields an empty array rather than an error.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<Vec<ApiWord>>> {
    let level = match query.level.as_deref() {
        Some(raw) => match Level::parse(raw) {
            Some(level) => Some(level),
            None => return Ok(Json(Vec::new())),
        },
        None => None,
    };

    let words = state.catalog.filter(level, query.category.as_deref());
    Ok(Json(words.into_iter().map(ApiWord::from_entry).collect()))
}

/// GET /api/word/:term
pub async fn find(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<ApiWord>> {
    let entry = state
        .catalog
        .find_by_term(&term)
        .ok_or_else(|| ApiError::NotFound(format!("word '{}'", term)))?;
    Ok(Json(ApiWord::from_entry(entry)))
}
