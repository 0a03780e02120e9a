//! Core types: players, errors, RNG.
//!
//! The fundamental building blocks shared by every other module. Nothing
//! here knows about sessions or the attack catalog.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{CombatError, CombatResult};
pub use player::{Item, Player, Role, StatusEffect};
pub use rng::{CombatRng, RandomSource};
