//! Core types for the vocabulary exercise engine.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty level a word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Default for Level {
    fn default() -> Self {
        Self::Beginner
    }
}

impl Level {
    /// All levels in ascending difficulty order.
    pub fn all() -> [Level; 4] {
        [
            Self::Beginner,
            Self::Intermediate,
            Self::Advanced,
            Self::Expert,
        ]
    }

    /// Numeric difficulty rank (1-4).
    pub fn numeric(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Expert => 4,
        }
    }

    /// Get the level name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    /// Parse from string. Unknown values yield `None` so callers can
    /// degrade to an empty result instead of failing.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

/// Part of speech of a vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        }
    }
}

/// A single vocabulary entry. Immutable once loaded; unique by term
/// within a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub term: String,
    pub definition: String,
    pub part_of_speech: PartOfSpeech,
    pub level: Level,
    pub category: String,
    pub example: String,
    /// Opaque reference to an audio clip; never fetched by the engine.
    pub pronunciation: String,
}

/// Exercise variants a session can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    FillBlank,
    MultipleChoice,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FillBlank => "fill_blank",
            Self::MultipleChoice => "multiple_choice",
        }
    }
}

/// Default number of words drawn per practice session.
pub const DEFAULT_WORDS_PER_SESSION: usize = 10;

/// Configuration supplied when starting a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    pub level: Level,
    pub exercise_type: ExerciseType,
    pub words_per_session: usize,
}

impl SessionConfig {
    pub fn new(level: Level, exercise_type: ExerciseType) -> Self {
        Self {
            level,
            exercise_type,
            words_per_session: DEFAULT_WORDS_PER_SESSION,
        }
    }
}

/// One graded answer. Append-only; exactly one per completed question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub submitted_term: String,
    pub correct_term: String,
    pub is_correct: bool,
}

/// Statistics computed once a session is complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub correct_count: usize,
    pub total_questions: usize,
    /// Percentage of correct answers, rounded; 0 for an empty session.
    pub accuracy: u32,
}

/// One entry in a user's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub detail: String,
    pub at: DateTime<Utc>,
}

/// Per-user progress owned by the progress store. Updated only at session
/// completion via [`crate::progress::apply_session_result`], plus the
/// checkpoint fields written by the progress endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub words_learned: u32,
    pub accuracy_rate: u32,
    pub current_streak: u32,
    pub time_spent_hours: f64,
    pub level_progress: HashMap<Level, u32>,
    pub recent_activity: Vec<ActivityEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_session_completed: Option<bool>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            words_learned: 0,
            accuracy_rate: 0,
            current_streak: 0,
            time_spent_hours: 0.0,
            level_progress: Level::all().into_iter().map(|l| (l, 0)).collect(),
            recent_activity: Vec::new(),
            current_level: None,
            last_session_completed: None,
        }
    }
}
