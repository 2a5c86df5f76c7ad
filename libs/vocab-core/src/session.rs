//! Practice-session state machine: question generation and grading.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::WordCatalog;
use crate::error::{EngineError, Result};
use crate::templates;
use crate::types::{AnswerRecord, ExerciseType, SessionConfig, SessionSummary, WordEntry};

/// Option-set width per question: the correct word plus three distractors.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Flat score increment per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// A generated question. `options` holds the correct entry and its
/// distractors in shuffled order; `passage` is set for fill-blank mode.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub index: usize,
    pub total: usize,
    pub word: WordEntry,
    pub options: Vec<WordEntry>,
    pub passage: Option<String>,
}

/// One run of a practice exercise, from start to completion.
///
/// The session moves through `InProgress` into `Complete` once every drawn
/// word has been answered; `answers.len() == current_index` holds at all
/// times. Callers must serialize access to one session.
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    config: SessionConfig,
    words: Vec<WordEntry>,
    current_index: usize,
    score: u32,
    answers: Vec<AnswerRecord>,
    pending: Option<Question>,
}

impl ExerciseSession {
    /// Start a session by drawing up to `words_per_session` distinct words
    /// from the configured level. A level with fewer words than requested
    /// clamps to what is available; a level with no words at all yields an
    /// immediately complete session.
    pub fn start<R: Rng + ?Sized>(
        catalog: &WordCatalog,
        rng: &mut R,
        config: SessionConfig,
    ) -> Self {
        let available = catalog.words_for_level(config.level).len();
        let count = config.words_per_session.min(available);
        let words = catalog
            .sample(rng, config.level, count, &HashSet::new())
            .unwrap_or_default();

        Self {
            config,
            words,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            pending: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.words.len()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Whether every drawn word has been answered.
    pub fn is_complete(&self) -> bool {
        self.current_index == self.words.len()
    }

    /// The question for the word at `current_index`. The first call per
    /// word generates it (distractor draw, unbiased shuffle, passage pick);
    /// repeated calls return the same question until it is answered.
    pub fn current_question<R: Rng + ?Sized>(
        &mut self,
        catalog: &WordCatalog,
        rng: &mut R,
    ) -> Result<Question> {
        if self.is_complete() {
            return Err(EngineError::SessionComplete);
        }
        if let Some(question) = &self.pending {
            return Ok(question.clone());
        }

        let word = self.words[self.current_index].clone();
        let distractors = catalog.distractors(rng, &word, OPTIONS_PER_QUESTION - 1);

        let mut options = Vec::with_capacity(1 + distractors.len());
        options.push(word.clone());
        options.extend(distractors);
        // Fisher-Yates, so the correct answer's position is uniform.
        options.shuffle(rng);

        let passage = match self.config.exercise_type {
            ExerciseType::FillBlank => Some(templates::passage_for(rng, self.config.level)),
            ExerciseType::MultipleChoice => None,
        };

        let question = Question {
            index: self.current_index,
            total: self.words.len(),
            word,
            options,
            passage,
        };
        self.pending = Some(question.clone());
        Ok(question)
    }

    /// Grade a submitted term against the current question and advance.
    ///
    /// Requires a pending question: submitting twice for one question (or
    /// after the session is complete) is rejected with `InvalidAnswer`
    /// rather than double-counted.
    pub fn submit_answer(&mut self, term: &str) -> Result<AnswerRecord> {
        if self.pending.take().is_none() {
            return Err(EngineError::InvalidAnswer);
        }

        let correct_term = self.words[self.current_index].term.clone();
        let is_correct = term.trim().eq_ignore_ascii_case(&correct_term);
        if is_correct {
            self.score += POINTS_PER_CORRECT;
        }

        let record = AnswerRecord {
            question_index: self.current_index,
            submitted_term: term.to_string(),
            correct_term,
            is_correct,
        };
        self.answers.push(record.clone());
        self.current_index += 1;
        Ok(record)
    }

    /// Summary statistics for a complete session. Accuracy is defined as 0
    /// for an empty session rather than NaN.
    pub fn summary(&self) -> Result<SessionSummary> {
        if !self.is_complete() {
            return Err(EngineError::SessionNotComplete);
        }

        let correct_count = self.answers.iter().filter(|a| a.is_correct).count();
        let accuracy = if self.answers.is_empty() {
            0
        } else {
            (100.0 * correct_count as f64 / self.answers.len() as f64).round() as u32
        };

        Ok(SessionSummary {
            score: self.score,
            correct_count,
            total_questions: self.answers.len(),
            accuracy,
        })
    }
}
