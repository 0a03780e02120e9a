//! Session registry: the set of active combat encounters.
//!
//! The registry exclusively owns session state. IDs come from a
//! monotonically increasing counter, so they are unique among active
//! sessions (and in fact across the registry's lifetime). Sessions have
//! no expiry; an abandoned session stays until explicitly ended.

use rustc_hash::FxHashMap;

use crate::core::{CombatError, CombatResult, RandomSource};
use crate::store::PlayerStore;

use super::session::{CombatSession, SessionId};

/// Registry of active combat sessions.
#[derive(Clone, Debug, Default)]
pub struct SessionRegistry {
    sessions: FxHashMap<SessionId, CombatSession>,
    next_id: u64,
}

impl SessionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session between two registered players.
    ///
    /// Fails with `NotFound` if either name is missing from the store
    /// and `InvalidArgument` on self-combat or an empty name. The
    /// initial turn holder is decided by a uniform coin flip from `rng`;
    /// the log is seeded with a session-start entry and a
    /// turn-announcement entry.
    pub fn start_session<S, R>(
        &mut self,
        store: &S,
        a: &str,
        b: &str,
        rng: &mut R,
    ) -> CombatResult<SessionId>
    where
        S: PlayerStore,
        R: RandomSource,
    {
        if a.is_empty() || b.is_empty() {
            return Err(CombatError::InvalidArgument(
                "player names must be non-empty".to_string(),
            ));
        }
        if a == b {
            return Err(CombatError::InvalidArgument(format!(
                "{a} cannot fight themselves"
            )));
        }
        for name in [a, b] {
            if !store.contains(name) {
                return Err(CombatError::NotFound(format!("player '{name}'")));
            }
        }

        let id = SessionId::new(self.next_id);
        self.next_id += 1;

        let first_turn = if rng.coin_flip() { 0 } else { 1 };
        let mut session = CombatSession::new(id, a, b, first_turn);
        session.push_log(format!("Combat started: {a} vs {b}!"));
        session.push_log(format!("It's {}'s turn!", session.turn_holder()));

        tracing::info!(session = %id, a, b, first = session.turn_holder(), "session started");
        self.sessions.insert(id, session);
        Ok(id)
    }

    /// Look up an active session.
    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&CombatSession> {
        self.sessions.get(&id)
    }

    /// Mutable access to an active session.
    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut CombatSession> {
        self.sessions.get_mut(&id)
    }

    /// Remove a session. Returns whether it existed.
    pub fn end_session(&mut self, id: SessionId) -> bool {
        let existed = self.sessions.remove(&id).is_some();
        if existed {
            tracing::info!(session = %id, "session ended");
        }
        existed
    }

    /// Number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True when no sessions are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
