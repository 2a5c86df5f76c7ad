//! Static word catalog partitioned by level.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{EngineError, Result};
use crate::types::{Level, WordEntry};

/// Built-in word data embedded at compile time.
const BUILTIN_WORDS: &str = include_str!("../data/words.json");

/// Queryable, immutable set of vocabulary entries. Entries keep their
/// insertion order within each level.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    by_level: HashMap<Level, Vec<WordEntry>>,
    total: usize,
}

impl WordCatalog {
    /// Build a catalog from a list of entries.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        let total = entries.len();
        let mut by_level: HashMap<Level, Vec<WordEntry>> =
            Level::all().into_iter().map(|l| (l, Vec::new())).collect();
        for entry in entries {
            by_level.entry(entry.level).or_default().push(entry);
        }
        Self { by_level, total }
    }

    /// Load the built-in word set.
    pub fn builtin() -> Self {
        let entries: Vec<WordEntry> =
            serde_json::from_str(BUILTIN_WORDS).expect("built-in word data is valid JSON");
        Self::new(entries)
    }

    /// Total number of entries across all levels.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All entries for a level, in stable insertion order.
    pub fn words_for_level(&self, level: Level) -> &[WordEntry] {
        self.by_level.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Filter entries by optional level and category. Absent filters pass
    /// everything through; unknown values simply match nothing.
    pub fn filter(&self, level: Option<Level>, category: Option<&str>) -> Vec<&WordEntry> {
        let levels: Vec<Level> = match level {
            Some(l) => vec![l],
            None => Level::all().to_vec(),
        };
        levels
            .into_iter()
            .flat_map(|l| self.words_for_level(l))
            .filter(|w| category.map_or(true, |c| w.category == c))
            .collect()
    }

    /// Look up a single entry by term, case-insensitively.
    pub fn find_by_term(&self, term: &str) -> Option<&WordEntry> {
        Level::all()
            .into_iter()
            .flat_map(|l| self.words_for_level(l))
            .find(|w| w.term.eq_ignore_ascii_case(term))
    }

    /// Draw `n` distinct entries uniformly at random from `level`, skipping
    /// any term in `exclude`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        level: Level,
        n: usize,
        exclude: &HashSet<String>,
    ) -> Result<Vec<WordEntry>> {
        let pool: Vec<&WordEntry> = self
            .words_for_level(level)
            .iter()
            .filter(|w| !exclude.contains(&w.term))
            .collect();
        if pool.len() < n {
            return Err(EngineError::InsufficientWords {
                requested: n,
                available: pool.len(),
            });
        }
        Ok(pool
            .choose_multiple(rng, n)
            .map(|&w| w.clone())
            .collect())
    }

    /// Pick up to `n` distractors for `correct`: same level with matching
    /// part of speech first, then same level regardless of part of speech,
    /// then the rest of the catalog. Terms never repeat and the correct
    /// word is never included. Returns fewer than `n` only when the whole
    /// catalog is exhausted.
    pub fn distractors<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        correct: &WordEntry,
        n: usize,
    ) -> Vec<WordEntry> {
        let mut picked: Vec<WordEntry> = Vec::with_capacity(n);
        let mut taken: HashSet<String> = HashSet::new();
        taken.insert(correct.term.clone());

        let same_level = self.words_for_level(correct.level);
        let same_pos: Vec<&WordEntry> = same_level
            .iter()
            .filter(|w| w.part_of_speech == correct.part_of_speech)
            .collect();
        let other_pos: Vec<&WordEntry> = same_level
            .iter()
            .filter(|w| w.part_of_speech != correct.part_of_speech)
            .collect();
        let other_levels: Vec<&WordEntry> = Level::all()
            .into_iter()
            .filter(|&l| l != correct.level)
            .flat_map(|l| self.words_for_level(l))
            .collect();

        for pool in [same_pos, other_pos, other_levels] {
            if picked.len() == n {
                break;
            }
            let candidates: Vec<&WordEntry> = pool
                .iter()
                .filter(|w| !taken.contains(&w.term))
                .copied()
                .collect();
            for &entry in candidates.choose_multiple(rng, n - picked.len()) {
                taken.insert(entry.term.clone());
                picked.push(entry.clone());
            }
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PartOfSpeech;
    use pretty_assertions::assert_eq;

    fn word(term: &str, level: Level, pos: PartOfSpeech) -> WordEntry {
        WordEntry {
            term: term.to_string(),
            definition: format!("definition of {term}"),
            part_of_speech: pos,
            level,
            category: "general".to_string(),
            example: format!("An example using {term}."),
            pronunciation: format!("/audio/{term}.mp3"),
        }
    }

    fn small_catalog() -> WordCatalog {
        WordCatalog::new(vec![
            word("alpha", Level::Beginner, PartOfSpeech::Adjective),
            word("bravo", Level::Beginner, PartOfSpeech::Adjective),
            word("charlie", Level::Beginner, PartOfSpeech::Noun),
            word("delta", Level::Beginner, PartOfSpeech::Verb),
            word("echo", Level::Intermediate, PartOfSpeech::Noun),
            word("foxtrot", Level::Intermediate, PartOfSpeech::Verb),
        ])
    }

    #[test]
    fn builtin_catalog_has_words_at_every_level() {
        let catalog = WordCatalog::builtin();
        for level in Level::all() {
            assert!(catalog.words_for_level(level).len() >= 5);
        }
    }

    #[test]
    fn builtin_terms_are_unique_within_level() {
        let catalog = WordCatalog::builtin();
        for level in Level::all() {
            let words = catalog.words_for_level(level);
            let terms: HashSet<&str> = words.iter().map(|w| w.term.as_str()).collect();
            assert_eq!(terms.len(), words.len());
        }
    }

    #[test]
    fn filter_without_arguments_passes_everything_through() {
        let catalog = small_catalog();
        assert_eq!(catalog.filter(None, None).len(), 6);
    }

    #[test]
    fn filter_by_level_and_category() {
        let catalog = small_catalog();
        assert_eq!(catalog.filter(Some(Level::Beginner), None).len(), 4);
        assert_eq!(
            catalog.filter(Some(Level::Beginner), Some("general")).len(),
            4
        );
        assert_eq!(catalog.filter(None, Some("science")).len(), 0);
        assert_eq!(catalog.filter(Some(Level::Expert), None).len(), 0);
    }

    #[test]
    fn find_by_term_is_case_insensitive() {
        let catalog = small_catalog();
        assert_eq!(catalog.find_by_term("ALPHA").map(|w| w.term.as_str()), Some("alpha"));
        assert!(catalog.find_by_term("omega").is_none());
    }

    #[test]
    fn sample_respects_exclusions_and_distinctness() {
        let catalog = small_catalog();
        let mut rng = rand::thread_rng();
        let exclude: HashSet<String> = ["alpha".to_string()].into_iter().collect();

        for _ in 0..50 {
            let drawn = catalog.sample(&mut rng, Level::Beginner, 3, &exclude).unwrap();
            assert_eq!(drawn.len(), 3);
            let terms: HashSet<&str> = drawn.iter().map(|w| w.term.as_str()).collect();
            assert_eq!(terms.len(), 3);
            assert!(!terms.contains("alpha"));
        }
    }

    #[test]
    fn sample_fails_when_pool_is_too_small() {
        let catalog = small_catalog();
        let mut rng = rand::thread_rng();
        let err = catalog
            .sample(&mut rng, Level::Intermediate, 3, &HashSet::new())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientWords {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn distractors_prefer_matching_part_of_speech() {
        let catalog = WordCatalog::new(vec![
            word("alpha", Level::Beginner, PartOfSpeech::Adjective),
            word("bravo", Level::Beginner, PartOfSpeech::Adjective),
            word("charlie", Level::Beginner, PartOfSpeech::Adjective),
            word("delta", Level::Beginner, PartOfSpeech::Adjective),
            word("echo", Level::Beginner, PartOfSpeech::Noun),
        ]);
        let correct = catalog.find_by_term("alpha").unwrap().clone();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let picked = catalog.distractors(&mut rng, &correct, 3);
            assert_eq!(picked.len(), 3);
            // Three same-POS alternatives exist, so the noun never appears.
            assert!(picked.iter().all(|w| w.part_of_speech == PartOfSpeech::Adjective));
            assert!(picked.iter().all(|w| w.term != "alpha"));
        }
    }

    #[test]
    fn distractors_pad_from_other_levels_when_needed() {
        let catalog = small_catalog();
        let correct = catalog.find_by_term("echo").unwrap().clone();
        let mut rng = rand::thread_rng();

        // Intermediate has one other entry, so two must come from beginner.
        let picked = catalog.distractors(&mut rng, &correct, 3);
        assert_eq!(picked.len(), 3);
        let terms: HashSet<&str> = picked.iter().map(|w| w.term.as_str()).collect();
        assert_eq!(terms.len(), 3);
        assert!(!terms.contains("echo"));
        assert!(terms.contains("foxtrot"));
    }

    #[test]
    fn distractors_never_exceed_catalog() {
        let catalog = WordCatalog::new(vec![
            word("alpha", Level::Beginner, PartOfSpeech::Adjective),
            word("bravo", Level::Beginner, PartOfSpeech::Noun),
        ]);
        let correct = catalog.find_by_term("alpha").unwrap().clone();
        let mut rng = rand::thread_rng();

        let picked = catalog.distractors(&mut rng, &correct, 3);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].term, "bravo");
    }
}
