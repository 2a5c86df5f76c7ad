//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::types::{
    ExerciseType, Level, PartOfSpeech, SessionConfig, SessionSummary, UserProgress, WordEntry,
};
use vocab_core::Question;

// === Word lookup ===

/// Query parameters for word listing. Values arrive as raw strings so an
/// unknown level filters to an empty result instead of a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct WordsQuery {
    pub level: Option<String>,
    pub category: Option<String>,
}

/// Word entry as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiWord {
    pub term: String,
    pub definition: String,
    pub level: Level,
    pub category: String,
    pub pronunciation_ref: String,
}

impl ApiWord {
    pub fn from_entry(entry: &WordEntry) -> Self {
        Self {
            term: entry.term.clone(),
            definition: entry.definition.clone(),
            level: entry.level,
            category: entry.category.clone(),
            pronunciation_ref: entry.pronunciation.clone(),
        }
    }
}

// === Progress ===

/// POST /api/progress body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressCheckpointRequest {
    pub user_id: String,
    pub level: Level,
    pub completed: bool,
}

/// Per-level slice of the completion report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelCompletion {
    pub level: Level,
    pub learned: u32,
    pub target: u32,
    pub percent: f64,
}

/// GET /api/progress/:user_id/levels response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelProgressResponse {
    pub user_id: String,
    pub levels: Vec<LevelCompletion>,
}

// === Practice sessions ===

/// POST /api/sessions body.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    pub user_id: String,
    pub level: Level,
    pub exercise_type: ExerciseType,
    pub words_per_session: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub total_questions: usize,
}

/// One selectable option of a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub term: String,
    pub definition: String,
}

/// GET /api/sessions/:id/question response. The correct answer is not
/// revealed; for multiple choice the prompt is the target term, for
/// fill-blank it is the passage with the blank marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub session_id: Uuid,
    pub index: usize,
    pub total: usize,
    pub exercise_type: ExerciseType,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
    pub hint: String,
    pub score: u32,
}

impl QuestionResponse {
    pub fn from_question(
        session_id: Uuid,
        exercise_type: ExerciseType,
        score: u32,
        question: &Question,
    ) -> Self {
        let prompt = match exercise_type {
            ExerciseType::FillBlank => question.passage.clone().unwrap_or_default(),
            ExerciseType::MultipleChoice => question.word.term.clone(),
        };
        // Fill-blank hints give part of speech plus meaning; multiple
        // choice gives usage context instead, since the meaning is the
        // thing being asked.
        let hint = match exercise_type {
            ExerciseType::FillBlank => format!(
                "This word is a {} that means \"{}\"",
                question.word.part_of_speech.as_str(),
                question.word.definition
            ),
            ExerciseType::MultipleChoice => format!("Context: \"{}\"", question.word.example),
        };
        Self {
            session_id,
            index: question.index,
            total: question.total,
            exercise_type,
            prompt,
            options: question
                .options
                .iter()
                .map(|w| QuestionOption {
                    term: w.term.clone(),
                    definition: w.definition.clone(),
                })
                .collect(),
            hint,
            score,
        }
    }
}

/// POST /api/sessions/:id/answer body.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub correct_term: String,
    pub score: u32,
    pub complete: bool,
}
