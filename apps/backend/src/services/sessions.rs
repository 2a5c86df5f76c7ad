//! In-memory registry of active practice sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;
use vocab_core::ExerciseSession;

/// A running session together with the user it belongs to.
#[derive(Debug)]
pub struct ActiveSession {
    pub user_id: String,
    pub session: ExerciseSession,
}

/// Uuid-keyed session registry. The lock serializes callers, matching the
/// engine's single-caller model; abandoned sessions simply stay until the
/// process exits.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, ActiveSession>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly started session and hand back its id.
    pub fn create(&self, user_id: String, session: ExerciseSession) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .write()
            .unwrap()
            .insert(id, ActiveSession { user_id, session });
        id
    }

    /// Run `f` against the session with `id`, if it exists.
    pub fn with<T>(&self, id: &Uuid, f: impl FnOnce(&mut ActiveSession) -> T) -> Option<T> {
        self.sessions.write().unwrap().get_mut(id).map(f)
    }

    /// Drop a session, returning whether it existed.
    pub fn remove(&self, id: &Uuid) -> bool {
        self.sessions.write().unwrap().remove(id).is_some()
    }

    pub fn active_count(&self) -> usize {
        self.sessions.read().unwrap().len()
    }
}
