//! Combat mechanics: damage resolution and progression.
//!
//! ## Key Pieces
//!
//! - `resolve_attack`: the damage-resolution algorithm and its tuning
//!   constants (miss, crit, variance)
//! - `award_victory` / `level_up`: the progression sequence run when a
//!   combatant is defeated

pub mod progression;
pub mod resolver;

pub use progression::{
    award_victory, level_up, VictoryReport, LEVEL_UP_ATTACK_GAIN, LEVEL_UP_DEFENSE_GAIN,
    LEVEL_UP_HP_GAIN, LEVEL_UP_MAGIC_GAIN, LEVEL_UP_MP_GAIN, XP_GROWTH_FACTOR, XP_PER_LEVEL_KILL,
};
pub use resolver::{
    resolve_attack, AttackResolution, CRIT_CHANCE, CRIT_MULTIPLIER, DAMAGE_VARIANCE_MAX,
    DAMAGE_VARIANCE_MIN, MISS_CHANCE,
};
