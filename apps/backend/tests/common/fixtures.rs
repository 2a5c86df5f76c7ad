//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use vocab_core::{Level, PartOfSpeech, WordEntry};

/// Build a word entry with sensible defaults.
pub fn word_entry(term: &str, level: Level, part_of_speech: PartOfSpeech) -> WordEntry {
    WordEntry {
        term: term.to_string(),
        definition: format!("definition of {term}"),
        part_of_speech,
        level,
        category: "general".to_string(),
        example: format!("An example sentence using {term}."),
        pronunciation: format!("/audio/{term}.mp3"),
    }
}

/// Generate `n` adjective entries at one level.
pub fn adjectives(n: usize, level: Level) -> Vec<WordEntry> {
    (0..n)
        .map(|i| word_entry(&format!("{}word{}", level.as_str(), i), level, PartOfSpeech::Adjective))
        .collect()
}

/// Create a start-session request body.
pub fn start_session_request(
    user_id: &str,
    level: &str,
    exercise_type: &str,
    words_per_session: Option<usize>,
) -> serde_json::Value {
    match words_per_session {
        Some(n) => json!({
            "user_id": user_id,
            "level": level,
            "exercise_type": exercise_type,
            "words_per_session": n,
        }),
        None => json!({
            "user_id": user_id,
            "level": level,
            "exercise_type": exercise_type,
        }),
    }
}

/// Create a progress checkpoint request body.
pub fn checkpoint_request(user_id: &str, level: &str, completed: bool) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "level": level,
        "completed": completed,
    })
}

/// Create a submit-answer request body.
pub fn answer_request(term: &str) -> serde_json::Value {
    json!({ "term": term })
}
