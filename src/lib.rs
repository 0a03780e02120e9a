//! # lostcastle
//!
//! Turn-based combat engine for the LostCastle RPG.
//!
//! ## Design Principles
//!
//! 1. **Injected collaborators**: The player store and RNG are generic
//!    parameters, never ambient globals. Tests supply fixture stores
//!    and scripted roll sequences to assert exact damage numbers.
//!
//! 2. **Validate, then mutate**: Every precondition of a turn is
//!    checked before any state change. A failed turn mutates nothing.
//!
//! 3. **One mutation surface**: All player writes funnel through the
//!    store's `update`, which re-clamps hp/mp, so the resource
//!    invariants hold after any sequence of turns.
//!
//! ## Modules
//!
//! - `core`: players, roles, errors, deterministic RNG
//! - `store`: the player registry collaborator
//! - `attacks`: role-indexed attack catalog
//! - `session`: active encounters and their registry
//! - `combat`: damage resolution and progression
//! - `engine`: the transport-facing facade

pub mod attacks;
pub mod combat;
pub mod core;
pub mod engine;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    CombatError, CombatResult, CombatRng, Item, Player, RandomSource, Role, StatusEffect,
};

pub use crate::store::{InMemoryPlayerStore, PlayerStore};

pub use crate::attacks::{AttackCatalog, AttackDefinition, DamageKind};

pub use crate::session::{CombatSession, SessionId, SessionRegistry};

pub use crate::combat::{
    award_victory, level_up, resolve_attack, AttackResolution, VictoryReport, CRIT_CHANCE,
    CRIT_MULTIPLIER, DAMAGE_VARIANCE_MAX, DAMAGE_VARIANCE_MIN, MISS_CHANCE, XP_PER_LEVEL_KILL,
};

pub use crate::engine::{AttackInfo, CombatEngine, CombatStart, TurnOutcome};
