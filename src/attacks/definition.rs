//! Attack definitions - static attack data.
//!
//! An `AttackDefinition` holds the immutable properties of a named,
//! role-scoped action: its damage category, power multiplier, and mp
//! cost. Runtime outcomes (miss, crit, damage dealt) live in
//! [`AttackResolution`](crate::combat::AttackResolution).

use serde::{Deserialize, Serialize};

/// Damage category of an attack.
///
/// Physical and Magical attacks scale off the attacker's `attack` and
/// `magic_power` stats respectively. Defensive and Effect attacks deal
/// no damage; they resolve without crashing and are only narrated for
/// now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    Physical,
    Magical,
    Defensive,
    Effect,
}

impl DamageKind {
    /// Lowercase label for logs and transport payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DamageKind::Physical => "physical",
            DamageKind::Magical => "magical",
            DamageKind::Defensive => "defensive",
            DamageKind::Effect => "effect",
        }
    }

    /// Whether this category produces damage at all.
    #[must_use]
    pub const fn deals_damage(self) -> bool {
        matches!(self, DamageKind::Physical | DamageKind::Magical)
    }
}

impl std::fmt::Display for DamageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static definition of a role-scoped attack.
///
/// ## Example
///
/// ```
/// use lostcastle::attacks::{AttackDefinition, DamageKind};
///
/// let slash = AttackDefinition::new("Slash", DamageKind::Physical, 1.1, 0);
/// assert_eq!(slash.cost, 0);
/// assert!(slash.kind.deals_damage());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackDefinition {
    /// Attack name, unique within a role's table.
    pub name: String,

    /// Damage category.
    pub kind: DamageKind,

    /// Power multiplier applied to the base stat. Must be >= 0.
    pub power: f32,

    /// Mp cost. Must be >= 0.
    pub cost: i32,
}

impl AttackDefinition {
    /// Create a new attack definition.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DamageKind, power: f32, cost: i32) -> Self {
        debug_assert!(power >= 0.0, "power multiplier must be non-negative");
        debug_assert!(cost >= 0, "mp cost must be non-negative");

        Self {
            name: name.into(),
            kind,
            power,
            cost,
        }
    }

    /// Whether a player holding `mp` can pay for this attack.
    #[must_use]
    pub fn affordable_with(&self, mp: i32) -> bool {
        mp >= self.cost
    }
}
