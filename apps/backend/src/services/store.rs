//! Per-user progress storage.

use std::collections::HashMap;
use std::sync::RwLock;

use vocab_core::UserProgress;

/// Key-value store for user progress. The engine never talks to this
/// directly; routes read the current value, fold a session in, and write
/// the result back. Implementations can back this with real persistence
/// without touching the engine.
pub trait ProgressStore: Send + Sync {
    fn get(&self, user_id: &str) -> Option<UserProgress>;
    fn put(&self, user_id: &str, progress: UserProgress);
    /// Remove a user's record, returning whether one existed.
    fn remove(&self, user_id: &str) -> bool;
}

/// In-memory store, process-lifetime only.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    entries: RwLock<HashMap<String, UserProgress>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get(&self, user_id: &str) -> Option<UserProgress> {
        self.entries.read().unwrap().get(user_id).cloned()
    }

    fn put(&self, user_id: &str, progress: UserProgress) {
        self.entries
            .write()
            .unwrap()
            .insert(user_id.to_string(), progress);
    }

    fn remove(&self, user_id: &str) -> bool {
        self.entries.write().unwrap().remove(user_id).is_some()
    }
}
