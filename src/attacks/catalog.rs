//! Attack catalog: role-indexed attack tables.
//!
//! The catalog is pure and stateless. Construction validates that every
//! role has at least one zero-cost attack, so a player with 0 mp can
//! always act.

use rustc_hash::FxHashMap;

use crate::core::{CombatError, CombatResult, Role};

use super::definition::{AttackDefinition, DamageKind};

/// Role-indexed table of attack definitions.
///
/// ## Example
///
/// ```
/// use lostcastle::attacks::AttackCatalog;
/// use lostcastle::core::Role;
///
/// let catalog = AttackCatalog::standard();
/// let slash = catalog.lookup(Role::Warrior, "Slash").unwrap();
/// assert_eq!(slash.cost, 0);
/// ```
#[derive(Clone, Debug)]
pub struct AttackCatalog {
    table: FxHashMap<Role, Vec<AttackDefinition>>,
}

impl AttackCatalog {
    /// Build a catalog from per-role tables, validating the guarantees
    /// the resolver relies on.
    ///
    /// Fails with `InvalidArgument` if any role is missing, has an empty
    /// table, or has no zero-cost attack.
    pub fn new(table: FxHashMap<Role, Vec<AttackDefinition>>) -> CombatResult<Self> {
        for role in Role::ALL {
            let attacks = table.get(&role).ok_or_else(|| {
                CombatError::InvalidArgument(format!("no attack table for role {role}"))
            })?;
            if !attacks.iter().any(|a| a.cost == 0) {
                return Err(CombatError::InvalidArgument(format!(
                    "role {role} has no zero-cost attack"
                )));
            }
        }
        Ok(Self { table })
    }

    /// The built-in attack tables shipped with the game.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = FxHashMap::default();

        table.insert(
            Role::Warrior,
            vec![
                AttackDefinition::new("Slash", DamageKind::Physical, 1.1, 0),
                AttackDefinition::new("Power Strike", DamageKind::Physical, 1.6, 10),
                AttackDefinition::new("Guard Stance", DamageKind::Defensive, 0.0, 5),
            ],
        );
        table.insert(
            Role::Mage,
            vec![
                AttackDefinition::new("Staff Strike", DamageKind::Physical, 0.9, 0),
                AttackDefinition::new("Fireball", DamageKind::Magical, 1.5, 12),
                AttackDefinition::new("Frost Lance", DamageKind::Magical, 1.2, 8),
                AttackDefinition::new("Mana Shield", DamageKind::Defensive, 0.0, 6),
            ],
        );
        table.insert(
            Role::Rogue,
            vec![
                AttackDefinition::new("Quick Stab", DamageKind::Physical, 1.0, 0),
                AttackDefinition::new("Shadow Strike", DamageKind::Physical, 1.8, 12),
                AttackDefinition::new("Smoke Bomb", DamageKind::Effect, 0.0, 6),
            ],
        );
        table.insert(
            Role::Cleric,
            vec![
                AttackDefinition::new("Mace Blow", DamageKind::Physical, 1.0, 0),
                AttackDefinition::new("Holy Smite", DamageKind::Magical, 1.3, 10),
                AttackDefinition::new("Prayer", DamageKind::Effect, 0.0, 5),
            ],
        );

        Self::new(table).expect("built-in attack tables are valid")
    }

    /// Ordered attack list for a role.
    #[must_use]
    pub fn attacks_for(&self, role: Role) -> &[AttackDefinition] {
        // Every role is present; `new` guarantees it.
        self.table.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find a named attack in a role's table.
    #[must_use]
    pub fn lookup(&self, role: Role, name: &str) -> Option<&AttackDefinition> {
        self.attacks_for(role).iter().find(|a| a.name == name)
    }

    /// Total number of attacks across all roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }

    /// True when no attacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AttackCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
