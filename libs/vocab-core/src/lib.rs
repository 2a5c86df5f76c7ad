//! Core vocabulary exercise engine shared by the backend service.
//!
//! Provides:
//! - Level-partitioned word catalog with random sampling
//! - Practice-session state machine (question generation, grading)
//! - Fill-in-the-blank passage templates
//! - Pure progress aggregation applied at session completion
//!
//! Everything here is synchronous and in-memory; randomness is injected
//! through `rand::Rng` so callers control the source.

pub mod catalog;
pub mod error;
pub mod progress;
pub mod session;
pub mod templates;
pub mod types;

pub use catalog::WordCatalog;
pub use error::{EngineError, Result};
pub use progress::{apply_session_result, level_completion_percent, STREAK_THRESHOLD, WORDS_PER_LEVEL};
pub use session::{ExerciseSession, Question, OPTIONS_PER_QUESTION, POINTS_PER_CORRECT};
pub use types::{
    ActivityEntry, AnswerRecord, ExerciseType, Level, PartOfSpeech, SessionConfig, SessionSummary,
    UserProgress, WordEntry, DEFAULT_WORDS_PER_SESSION,
};
