//! Progress aggregation: folds a finished session into per-user stats.

use chrono::{DateTime, Utc};

use crate::types::{ActivityEntry, Level, SessionSummary, UserProgress};

/// Session accuracy (percent) required to keep a streak alive.
pub const STREAK_THRESHOLD: u32 = 80;

/// Overall accuracy rate moves up one point per completed session, capped
/// here. Intentionally a flat increment, not derived from the session's
/// own accuracy.
pub const ACCURACY_CAP: u32 = 95;

/// Flat per-session time estimate, in hours.
pub const HOURS_PER_SESSION: f64 = 0.25;

/// Target word count per level for completion reporting.
pub const WORDS_PER_LEVEL: u32 = 875;

const MAX_ACTIVITY_ENTRIES: usize = 50;

/// Fold a session summary into a user's progress. Pure: the caller passes
/// `now` in, and the input value is never mutated.
pub fn apply_session_result(
    progress: &UserProgress,
    summary: &SessionSummary,
    level: Level,
    now: DateTime<Utc>,
) -> UserProgress {
    let mut next = progress.clone();

    next.words_learned += summary.correct_count as u32;
    next.accuracy_rate = (next.accuracy_rate + 1).min(ACCURACY_CAP);
    next.current_streak = if summary.accuracy >= STREAK_THRESHOLD {
        next.current_streak + 1
    } else {
        0
    };
    next.time_spent_hours += HOURS_PER_SESSION;
    *next.level_progress.entry(level).or_insert(0) += summary.correct_count as u32;

    next.recent_activity.push(ActivityEntry {
        title: "Practice Session".to_string(),
        detail: format!(
            "Completed {} exercise: {}/{} correct",
            level.as_str(),
            summary.correct_count,
            summary.total_questions
        ),
        at: now,
    });
    if next.recent_activity.len() > MAX_ACTIVITY_ENTRIES {
        let excess = next.recent_activity.len() - MAX_ACTIVITY_ENTRIES;
        next.recent_activity.drain(..excess);
    }

    next
}

/// Completion percentage for a level, against the fixed per-level target.
pub fn level_completion_percent(progress: &UserProgress, level: Level) -> f64 {
    let learned = progress.level_progress.get(&level).copied().unwrap_or(0);
    (100.0 * f64::from(learned) / f64::from(WORDS_PER_LEVEL)).min(100.0)
}
