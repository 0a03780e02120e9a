//! Player records: roles, stats, status, inventory.
//!
//! A `Player` is the unit of combat state. Records live in a
//! [`PlayerStore`](crate::store::PlayerStore) keyed by name; combat and
//! progression mutate them in place through the store's single update
//! entry point, which re-establishes the resource invariants
//! `0 <= hp <= max_hp` and `0 <= mp <= max_mp` after every mutation.

use serde::{Deserialize, Serialize};

/// Combat role. Fixed enumeration; drives the attack catalog and the
/// starting stat line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

impl Role {
    /// All roles, in catalog order.
    pub const ALL: [Role; 4] = [Role::Warrior, Role::Mage, Role::Rogue, Role::Cleric];

    /// Role name for display and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Warrior => "Warrior",
            Role::Mage => "Mage",
            Role::Rogue => "Rogue",
            Role::Cleric => "Cleric",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status ailment on a player.
///
/// Tracked in the record but not yet applied mechanically by the turn
/// resolver; combat reads and writes it only through the normal store
/// surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusEffect {
    #[default]
    Normal,
    Poisoned,
    Paralyzed,
    Burned,
}

/// An inventory entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub quantity: u32,
}

impl Item {
    /// Create an item with a quantity of one.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            quantity: 1,
        }
    }
}

/// A registered combatant.
///
/// ## Example
///
/// ```
/// use lostcastle::core::{Player, Role};
///
/// let arthas = Player::new("Arthas", Role::Warrior);
/// assert_eq!(arthas.hp, 120);
/// assert_eq!(arthas.attack, 15);
/// assert!(!arthas.is_defeated());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique key in the player store.
    pub name: String,
    pub role: Role,

    pub level: u32,
    pub experience: u32,
    /// Threshold at which the next level-up triggers.
    pub experience_to_next: u32,

    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,

    pub attack: i32,
    pub defense: i32,
    pub magic_power: i32,

    pub gold: i64,
    pub status: StatusEffect,
    pub inventory: Vec<Item>,
}

impl Player {
    /// Create a level-1 player with the starting stat line for `role`.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        let (hp, mp, attack, defense, magic_power) = match role {
            Role::Warrior => (120, 20, 15, 10, 5),
            Role::Mage => (90, 60, 5, 5, 20),
            Role::Rogue => (100, 30, 12, 6, 8),
            Role::Cleric => (110, 50, 8, 8, 14),
        };

        Self {
            name: name.into(),
            role,
            level: 1,
            experience: 0,
            experience_to_next: 100,
            hp,
            max_hp: hp,
            mp,
            max_mp: mp,
            attack,
            defense,
            magic_power,
            gold: 0,
            status: StatusEffect::default(),
            inventory: Vec::new(),
        }
    }

    /// True once hp has reached zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Apply damage, flooring hp at zero.
    pub fn apply_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount.max(0)).max(0);
    }

    /// Deduct an mp cost. Callers validate affordability first.
    pub fn spend_mp(&mut self, cost: i32) {
        debug_assert!(cost <= self.mp, "resource check must precede spend_mp");
        self.mp = (self.mp - cost.max(0)).max(0);
    }

    /// Restore hp and mp to their maxima.
    pub fn restore_all(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }

    /// Clamp hp and mp back into `[0, max]`.
    ///
    /// The store calls this after every update closure so arbitrary
    /// mutations cannot leave the record out of bounds.
    pub fn clamp_resources(&mut self) {
        self.hp = self.hp.clamp(0, self.max_hp.max(0));
        self.mp = self.mp.clamp(0, self.max_mp.max(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_stats_per_role() {
        let warrior = Player::new("Arthas", Role::Warrior);
        assert_eq!(
            (warrior.hp, warrior.attack, warrior.defense),
            (120, 15, 10)
        );

        let mage = Player::new("Jaina", Role::Mage);
        assert_eq!((mage.hp, mage.defense, mage.magic_power), (90, 5, 20));

        for role in Role::ALL {
            let p = Player::new("x", role);
            assert_eq!(p.level, 1);
            assert_eq!(p.hp, p.max_hp);
            assert_eq!(p.mp, p.max_mp);
            assert_eq!(p.experience_to_next, 100);
            assert_eq!(p.status, StatusEffect::Normal);
        }
    }

    #[test]
    fn test_apply_damage_floors_at_zero() {
        let mut p = Player::new("x", Role::Mage);
        p.apply_damage(40);
        assert_eq!(p.hp, 50);

        p.apply_damage(999);
        assert_eq!(p.hp, 0);
        assert!(p.is_defeated());

        // Negative damage is ignored, never heals.
        p.apply_damage(-10);
        assert_eq!(p.hp, 0);
    }

    #[test]
    fn test_spend_mp() {
        let mut p = Player::new("x", Role::Mage);
        p.spend_mp(12);
        assert_eq!(p.mp, 48);
    }

    #[test]
    fn test_clamp_resources() {
        let mut p = Player::new("x", Role::Warrior);
        p.hp = 500;
        p.mp = -3;
        p.clamp_resources();
        assert_eq!(p.hp, p.max_hp);
        assert_eq!(p.mp, 0);
    }

    #[test]
    fn test_restore_all() {
        let mut p = Player::new("x", Role::Cleric);
        p.hp = 1;
        p.mp = 0;
        p.restore_all();
        assert_eq!(p.hp, p.max_hp);
        assert_eq!(p.mp, p.max_mp);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut p = Player::new("Arthas", Role::Warrior);
        p.inventory.push(Item::new("Potion", "Restores 30 hp"));

        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
