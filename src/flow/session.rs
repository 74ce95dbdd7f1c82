//! Per-user session storage
//!
//! Each user has at most one session tracking the active conversation state
//! and the value captured on the previous turn. Sessions live only in memory
//! for the lifetime of the process; the store is injected into the transport
//! adapters so the engine can be exercised without a live bot.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{FlowState, Transition};

/// Conversation session for a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// User ID this session belongs to
    pub user_id: i64,
    /// Current conversation state
    pub state: FlowState,
    /// Value captured on the previous turn of the active flow
    pub pending_field: Option<String>,
    /// When this session was last updated
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh idle session for a user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            state: FlowState::Idle,
            pending_field: None,
            updated_at: Utc::now(),
        }
    }

    /// Apply the outcome of one engine turn
    pub fn apply(&mut self, transition: &Transition) {
        self.state = transition.state;
        self.pending_field = transition.pending.clone();
        self.updated_at = Utc::now();
    }

    /// Whether no flow is active
    pub fn is_idle(&self) -> bool {
        self.state == FlowState::Idle
    }
}

/// Session storage keyed by user identity
pub trait SessionStore: Send + Sync {
    /// Load the session for a user, or a fresh idle one if none exists
    fn load(&self, user_id: i64) -> Session;

    /// Save a session
    fn save(&self, session: Session);

    /// Remove a user's session
    fn delete(&self, user_id: i64);
}

/// In-memory session store
///
/// Sessions are not persisted across restarts; an interrupted flow simply
/// starts over from `Idle`.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<i64, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> std::sync::MutexGuard<'_, HashMap<i64, Session>> {
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, user_id: i64) -> Session {
        self.sessions()
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| Session::new(user_id))
    }

    fn save(&self, session: Session) {
        debug!(user_id = session.user_id, state = ?session.state, "Saving session");
        self.sessions().insert(session.user_id, session);
    }

    fn delete(&self, user_id: i64) {
        if self.sessions().remove(&user_id).is_some() {
            debug!(user_id = user_id, "Deleted session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(123);
        assert_eq!(session.user_id, 123);
        assert!(session.is_idle());
        assert!(session.pending_field.is_none());
    }

    #[test]
    fn test_load_unknown_user_returns_fresh_session() {
        let store = InMemorySessionStore::new();
        let session = store.load(42);
        assert_eq!(session.user_id, 42);
        assert!(session.is_idle());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = InMemorySessionStore::new();
        let mut session = Session::new(42);
        session.state = FlowState::AwaitingExpenseAmount;
        session.pending_field = Some("Security Salary".to_string());
        store.save(session);

        let loaded = store.load(42);
        assert_eq!(loaded.state, FlowState::AwaitingExpenseAmount);
        assert_eq!(loaded.pending_field.as_deref(), Some("Security Salary"));
    }

    #[test]
    fn test_delete_resets_to_idle() {
        let store = InMemorySessionStore::new();
        let mut session = Session::new(42);
        session.state = FlowState::AwaitingPaymentFlat;
        store.save(session);

        store.delete(42);
        assert!(store.load(42).is_idle());
    }

    #[test]
    fn test_sessions_are_scoped_per_user() {
        let store = InMemorySessionStore::new();
        let mut session = Session::new(1);
        session.state = FlowState::AwaitingTankerAmount;
        store.save(session);

        assert!(store.load(2).is_idle());
        assert_eq!(store.load(1).state, FlowState::AwaitingTankerAmount);
    }
}
