//! Damage resolution: turning a chosen attack into a number.
//!
//! `resolve_attack` is pure given a roll sequence - it reads the two
//! player records and consumes rolls from the injected [`RandomSource`],
//! but mutates nothing. The engine applies the result to the defender.
//!
//! ## Roll order
//!
//! 1. Miss check (`MISS_CHANCE`). A miss consumes no further rolls.
//! 2. Damage variance (`DAMAGE_VARIANCE_MIN..=DAMAGE_VARIANCE_MAX`).
//! 3. Critical check (`CRIT_CHANCE`).
//!
//! Non-damaging attacks (defensive / effect) consume only the miss
//! roll: with zero base damage the variance and crit rolls could not
//! change the outcome.

use crate::attacks::{AttackDefinition, DamageKind};
use crate::core::{Player, RandomSource};

/// Probability that any attack misses outright.
pub const MISS_CHANCE: f64 = 0.08;

/// Probability that a connecting, damaging attack crits.
pub const CRIT_CHANCE: f64 = 0.15;

/// Damage multiplier applied on a critical hit.
pub const CRIT_MULTIPLIER: f32 = 1.5;

/// Lower bound of the uniform damage variance factor.
pub const DAMAGE_VARIANCE_MIN: f32 = 0.85;

/// Upper bound of the uniform damage variance factor.
pub const DAMAGE_VARIANCE_MAX: f32 = 1.15;

/// Outcome of a single resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackResolution {
    /// Damage to apply to the defender. Zero on a miss or for
    /// non-damaging attack kinds.
    pub damage: i32,
    /// The attack missed outright.
    pub missed: bool,
    /// The attack was a critical hit.
    pub critical: bool,
}

impl AttackResolution {
    const MISS: Self = Self {
        damage: 0,
        missed: true,
        critical: false,
    };
}

/// Resolve one attack from `attacker` against `defender`.
///
/// Damage formula for physical/magical attacks:
///
/// ```text
/// raw    = base_stat * power * variance        (variance in [0.85, 1.15])
/// damage = max(round(raw - defense), 1)        (min 1 whenever raw > 0)
/// crit   = round(damage * 1.5)                 (on a successful crit roll)
/// ```
///
/// Physical attacks use the attacker's `attack` stat, magical attacks
/// the attacker's `magic_power`. Defensive and effect attacks resolve
/// to zero damage without error.
pub fn resolve_attack<R: RandomSource>(
    attacker: &Player,
    defender: &Player,
    attack: &AttackDefinition,
    rng: &mut R,
) -> AttackResolution {
    if rng.chance(MISS_CHANCE) {
        return AttackResolution::MISS;
    }

    let base_stat = match attack.kind {
        DamageKind::Physical => attacker.attack,
        DamageKind::Magical => attacker.magic_power,
        DamageKind::Defensive | DamageKind::Effect => {
            return AttackResolution {
                damage: 0,
                missed: false,
                critical: false,
            };
        }
    };

    let variance = rng.uniform(DAMAGE_VARIANCE_MIN, DAMAGE_VARIANCE_MAX);
    let raw = base_stat as f32 * attack.power * variance;

    let mut damage = if raw > 0.0 {
        // A connecting attack always deals at least 1 point.
        ((raw - defender.defense as f32).round() as i32).max(1)
    } else {
        0
    };

    let critical = damage > 0 && rng.chance(CRIT_CHANCE);
    if critical {
        damage = (damage as f32 * CRIT_MULTIPLIER).round() as i32;
    }

    AttackResolution {
        damage,
        missed: false,
        critical,
    }
}
