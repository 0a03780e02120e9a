//! Combat session state.
//!
//! A session tracks one encounter between exactly two players: who is
//! fighting, whose turn it is, and the narrative log. Players are held
//! by name - the records themselves live in the player store, so any
//! mutation there is immediately visible to readers of the session.

use serde::{Deserialize, Serialize};

/// Unique identifier for an active session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// One active combat encounter.
///
/// Participant order is fixed at creation; the turn holder alternates
/// after every resolved, non-terminal turn. The log is append-only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CombatSession {
    id: SessionId,
    participants: [String; 2],
    /// Index into `participants` of the player allowed to act.
    turn: usize,
    log: Vec<String>,
}

impl CombatSession {
    /// Create a session. `first_turn` indexes into `[a, b]`.
    #[must_use]
    pub fn new(id: SessionId, a: impl Into<String>, b: impl Into<String>, first_turn: usize) -> Self {
        debug_assert!(first_turn < 2);
        Self {
            id,
            participants: [a.into(), b.into()],
            turn: first_turn,
            log: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Both participant names, in creation order.
    #[must_use]
    pub fn participants(&self) -> (&str, &str) {
        (&self.participants[0], &self.participants[1])
    }

    /// Name of the player permitted to act next.
    #[must_use]
    pub fn turn_holder(&self) -> &str {
        &self.participants[self.turn]
    }

    /// The other participant, given one of the two names.
    ///
    /// Returns `None` if `name` is not in this session.
    #[must_use]
    pub fn opponent_of(&self, name: &str) -> Option<&str> {
        if self.participants[0] == name {
            Some(&self.participants[1])
        } else if self.participants[1] == name {
            Some(&self.participants[0])
        } else {
            None
        }
    }

    /// Whether `name` is one of the two combatants.
    #[must_use]
    pub fn is_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Hand the turn to the other participant.
    pub fn flip_turn(&mut self) {
        self.turn = 1 - self.turn;
    }

    /// Append a narrative entry.
    pub fn push_log(&mut self, entry: impl Into<String>) {
        self.log.push(entry.into());
    }

    /// The full narrative log since session start.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }
}
