//! Practice session endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;
use vocab_core::{apply_session_result, AnswerRecord, ExerciseSession, DEFAULT_WORDS_PER_SESSION};

/// POST /api/sessions
pub async fn start(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<Json<StartSessionResponse>> {
    let words_per_session = request
        .words_per_session
        .unwrap_or(DEFAULT_WORDS_PER_SESSION);
    if words_per_session == 0 {
        return Err(ApiError::BadRequest(
            "words_per_session must be at least 1".to_string(),
        ));
    }

    let config = SessionConfig {
        level: request.level,
        exercise_type: request.exercise_type,
        words_per_session,
    };
    let session = ExerciseSession::start(&state.catalog, &mut rand::thread_rng(), config);
    let total_questions = session.total_questions();
    let session_id = state.sessions.create(request.user_id, session);

    tracing::info!(
        %session_id,
        level = config.level.as_str(),
        exercise_type = config.exercise_type.as_str(),
        total_questions,
        "session started"
    );

    Ok(Json(StartSessionResponse {
        session_id,
        total_questions,
    }))
}

/// GET /api/sessions/:id/question
pub async fn question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionResponse>> {
    let generated = state
        .sessions
        .with(&id, |active| {
            let exercise_type = active.session.config().exercise_type;
            let score = active.session.score();
            active
                .session
                .current_question(&state.catalog, &mut rand::thread_rng())
                .map(|q| QuestionResponse::from_question(id, exercise_type, score, &q))
        })
        .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))?;

    Ok(Json(generated?))
}

/// POST /api/sessions/:id/answer
///
/// Grades the pending question and advances the session. Completing the
/// final question folds the summary into the user's stored progress.
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>> {
    type Graded = (AnswerRecord, u32, Option<SessionSummary>, String, Level);

    let graded = state
        .sessions
        .with(&id, |active| -> vocab_core::Result<Graded> {
            let record = active.session.submit_answer(&request.term)?;
            let complete = active.session.is_complete();
            let summary = if complete {
                Some(active.session.summary()?)
            } else {
                None
            };
            Ok((
                record,
                active.session.score(),
                summary,
                active.user_id.clone(),
                active.session.config().level,
            ))
        })
        .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))?;
    let (record, score, summary, user_id, level) = graded?;

    let complete = summary.is_some();
    if let Some(summary) = summary {
        let before = state.progress.get(&user_id).unwrap_or_default();
        let updated = apply_session_result(&before, &summary, level, Utc::now());
        state.progress.put(&user_id, updated);
        tracing::info!(
            %id,
            user_id = %user_id,
            accuracy = summary.accuracy,
            score = summary.score,
            "session complete, progress recorded"
        );
    }

    Ok(Json(SubmitAnswerResponse {
        correct: record.is_correct,
        correct_term: record.correct_term,
        score,
        complete,
    }))
}

/// GET /api/sessions/:id/summary
///
/// Extracting the summary retires the finished session.
pub async fn summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>> {
    let summary = state
        .sessions
        .with(&id, |active| active.session.summary())
        .ok_or_else(|| ApiError::NotFound(format!("session {}", id)))?;
    let summary = summary?;

    state.sessions.remove(&id);
    Ok(Json(summary))
}
