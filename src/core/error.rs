//! Error taxonomy for combat operations.
//!
//! Every variant is a terminal, locally-detected business error: the
//! operation that returns it has performed no state mutation. There are
//! no transient failures here - the engine does no I/O.

use thiserror::Error;

use super::player::Role;

/// Errors surfaced by combat operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CombatError {
    /// Unknown player or session.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request (self-combat, empty name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The acting player is not the current turn holder.
    #[error("it is not {player}'s turn")]
    InvalidTurn { player: String },

    /// The attack is not in the attacker role's catalog.
    #[error("{role} has no attack named '{attack}'")]
    InvalidAttack { role: Role, attack: String },

    /// The attack costs more mp than the attacker has.
    #[error("attack requires {required} mp but only {available} available")]
    InsufficientResource { required: i32, available: i32 },
}

/// Convenience alias used throughout the crate.
pub type CombatResult<T> = Result<T, CombatError>;
