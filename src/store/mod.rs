//! Player store: the registry of combatant records.
//!
//! The store is an external collaborator from the combat core's point of
//! view - the engine takes it by generic parameter rather than reaching
//! for a global. All mutation funnels through [`PlayerStore::update`],
//! which re-clamps hp/mp after the closure runs, so the resource
//! invariants are enforced in exactly one place no matter which code
//! path (combat, progression, CRUD transport) performs the write.

use rustc_hash::FxHashMap;

use crate::core::{CombatError, CombatResult, Player};

/// Keyed access to player records.
pub trait PlayerStore {
    /// Look up a player by name.
    fn get(&self, name: &str) -> Option<&Player>;

    /// Insert or replace a record, keyed by `player.name`.
    ///
    /// Returns the previous record for that name, if any.
    fn insert(&mut self, player: Player) -> Option<Player>;

    /// Remove a record. Returns it if it existed.
    fn remove(&mut self, name: &str) -> Option<Player>;

    /// Mutate a record in place.
    ///
    /// The single mutation entry point: after `mutate` runs, hp and mp
    /// are clamped back into `[0, max]`. Returns `NotFound` if the name
    /// is unknown; the closure is not called in that case.
    fn update<F>(&mut self, name: &str, mutate: F) -> CombatResult<()>
    where
        F: FnOnce(&mut Player);

    /// Whether a record exists for `name`.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered players.
    fn len(&self) -> usize;

    /// True when no players are registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory player store backed by a hash map.
///
/// ## Example
///
/// ```
/// use lostcastle::core::{Player, Role};
/// use lostcastle::store::{InMemoryPlayerStore, PlayerStore};
///
/// let mut store = InMemoryPlayerStore::new();
/// store.insert(Player::new("Arthas", Role::Warrior));
///
/// store.update("Arthas", |p| p.gold += 50).unwrap();
/// assert_eq!(store.get("Arthas").unwrap().gold, 50);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryPlayerStore {
    players: FxHashMap<String, Player>,
}

impl InMemoryPlayerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over all records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    fn insert(&mut self, player: Player) -> Option<Player> {
        self.players.insert(player.name.clone(), player)
    }

    fn remove(&mut self, name: &str) -> Option<Player> {
        self.players.remove(name)
    }

    fn update<F>(&mut self, name: &str, mutate: F) -> CombatResult<()>
    where
        F: FnOnce(&mut Player),
    {
        let player = self
            .players
            .get_mut(name)
            .ok_or_else(|| CombatError::NotFound(format!("player '{name}'")))?;
        mutate(player);
        player.clamp_resources();
        Ok(())
    }

    fn len(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    #[test]
    fn test_insert_get_remove() {
        let mut store = InMemoryPlayerStore::new();
        assert!(store.is_empty());

        store.insert(Player::new("Arthas", Role::Warrior));
        assert_eq!(store.len(), 1);
        assert!(store.contains("Arthas"));
        assert_eq!(store.get("Arthas").unwrap().role, Role::Warrior);

        let removed = store.remove("Arthas").unwrap();
        assert_eq!(removed.name, "Arthas");
        assert!(store.is_empty());
        assert!(store.get("Arthas").is_none());
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut store = InMemoryPlayerStore::new();
        store.insert(Player::new("Arthas", Role::Warrior));
        let old = store.insert(Player::new("Arthas", Role::Mage));

        assert_eq!(old.unwrap().role, Role::Warrior);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Arthas").unwrap().role, Role::Mage);
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let mut store = InMemoryPlayerStore::new();
        let err = store.update("ghost", |p| p.gold += 1).unwrap_err();
        assert!(matches!(err, CombatError::NotFound(_)));
    }

    #[test]
    fn test_update_clamps_resources() {
        let mut store = InMemoryPlayerStore::new();
        store.insert(Player::new("Jaina", Role::Mage));

        // An out-of-bounds write is corrected at the store boundary.
        store.update("Jaina", |p| p.hp = 9999).unwrap();
        let jaina = store.get("Jaina").unwrap();
        assert_eq!(jaina.hp, jaina.max_hp);

        store.update("Jaina", |p| p.mp = -40).unwrap();
        assert_eq!(store.get("Jaina").unwrap().mp, 0);
    }
}
