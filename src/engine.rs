//! Combat engine: the transport-facing facade.
//!
//! `CombatEngine` wires the player store, attack catalog, session
//! registry, and RNG together and exposes the three operations a
//! transport layer needs: start a combat, list a player's attacks, and
//! take a turn. Store and RNG are generic parameters so tests can
//! inject fixtures and scripted roll sequences.
//!
//! ## Turn atomicity
//!
//! Every precondition is checked before any state change: a failed turn
//! mutates nothing. Mutations to a session and its two participants are
//! serialized structurally - all mutating operations take
//! `&mut self`, so concurrent turns against the same engine cannot
//! interleave.

use serde::{Deserialize, Serialize};

use crate::attacks::{AttackCatalog, AttackDefinition, DamageKind};
use crate::combat::{award_victory, resolve_attack};
use crate::core::{CombatError, CombatResult, CombatRng, RandomSource};
use crate::session::{CombatSession, SessionId, SessionRegistry};
use crate::store::{InMemoryPlayerStore, PlayerStore};

/// Response to a successful combat start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatStart {
    pub session_id: SessionId,
    /// Initial announcement log (session start + first turn).
    pub log: Vec<String>,
    /// Name of the player who acts first.
    pub first_turn: String,
}

/// One attack as presented to a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DamageKind,
    pub power: f32,
    pub cost: i32,
}

impl From<&AttackDefinition> for AttackInfo {
    fn from(attack: &AttackDefinition) -> Self {
        Self {
            name: attack.name.clone(),
            kind: attack.kind,
            power: attack.power,
            cost: attack.cost,
        }
    }
}

/// Response to a resolved turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Narrative entries generated by this turn, in order.
    pub log: Vec<String>,
    /// The defender was defeated and the session destroyed.
    pub session_ended: bool,
    /// Next turn holder. `None` exactly when the session ended.
    pub next_turn: Option<String>,
}

/// The combat engine.
///
/// ## Example
///
/// ```
/// use lostcastle::core::{Player, Role};
/// use lostcastle::engine::CombatEngine;
/// use lostcastle::store::PlayerStore;
///
/// let mut engine = CombatEngine::with_seed(42);
/// engine.store_mut().insert(Player::new("Arthas", Role::Warrior));
/// engine.store_mut().insert(Player::new("Jaina", Role::Mage));
///
/// let start = engine.start_combat("Arthas", "Jaina").unwrap();
/// let attacks = engine.list_attacks(&start.first_turn).unwrap();
/// assert!(!attacks.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct CombatEngine<S, R> {
    store: S,
    catalog: AttackCatalog,
    sessions: SessionRegistry,
    rng: R,
}

impl CombatEngine<InMemoryPlayerStore, CombatRng> {
    /// Engine with an empty in-memory store, the standard catalog, and
    /// a seeded RNG.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(InMemoryPlayerStore::new(), CombatRng::new(seed))
    }
}

impl<S, R> CombatEngine<S, R>
where
    S: PlayerStore,
    R: RandomSource,
{
    /// Create an engine over the given store and RNG with the standard
    /// attack catalog.
    #[must_use]
    pub fn new(store: S, rng: R) -> Self {
        Self::with_catalog(store, AttackCatalog::standard(), rng)
    }

    /// Create an engine with a custom attack catalog.
    #[must_use]
    pub fn with_catalog(store: S, catalog: AttackCatalog, rng: R) -> Self {
        Self {
            store,
            catalog,
            sessions: SessionRegistry::new(),
            rng,
        }
    }

    /// The player store (CRUD collaborator surface).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the player store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The attack catalog.
    pub fn catalog(&self) -> &AttackCatalog {
        &self.catalog
    }

    /// Look up an active session.
    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<&CombatSession> {
        self.sessions.get(id)
    }

    /// Number of active sessions.
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Start a combat between two registered players.
    ///
    /// Fails with `NotFound` for an unknown name and `InvalidArgument`
    /// for self-combat.
    pub fn start_combat(&mut self, a: &str, b: &str) -> CombatResult<CombatStart> {
        let id = self
            .sessions
            .start_session(&self.store, a, b, &mut self.rng)?;
        let session = self
            .sessions
            .get(id)
            .expect("session registered by start_session");

        Ok(CombatStart {
            session_id: id,
            log: session.log().to_vec(),
            first_turn: session.turn_holder().to_string(),
        })
    }

    /// Ordered attack list for a player's role.
    pub fn list_attacks(&self, name: &str) -> CombatResult<Vec<AttackInfo>> {
        let player = self
            .store
            .get(name)
            .ok_or_else(|| CombatError::NotFound(format!("player '{name}'")))?;

        Ok(self
            .catalog
            .attacks_for(player.role)
            .iter()
            .map(AttackInfo::from)
            .collect())
    }

    /// Resolve one turn: `attacker` uses `attack_name` against the
    /// session's other participant.
    ///
    /// Validation happens before any mutation; on success exactly one
    /// of two things occurs - the turn flips to the defender, or the
    /// defender is defeated and the session destroyed.
    pub fn take_turn(
        &mut self,
        id: SessionId,
        attacker: &str,
        attack_name: &str,
    ) -> CombatResult<TurnOutcome> {
        // Validation phase: reads only.
        let session = self
            .sessions
            .get(id)
            .ok_or_else(|| CombatError::NotFound(format!("{id}")))?;
        if session.turn_holder() != attacker {
            return Err(CombatError::InvalidTurn {
                player: attacker.to_string(),
            });
        }
        let defender_name = session
            .opponent_of(attacker)
            .ok_or_else(|| CombatError::InvalidTurn {
                player: attacker.to_string(),
            })?
            .to_string();

        let attacker_rec = self
            .store
            .get(attacker)
            .ok_or_else(|| CombatError::NotFound(format!("player '{attacker}'")))?;
        let attack = self
            .catalog
            .lookup(attacker_rec.role, attack_name)
            .ok_or_else(|| CombatError::InvalidAttack {
                role: attacker_rec.role,
                attack: attack_name.to_string(),
            })?
            .clone();
        if attacker_rec.mp < attack.cost {
            return Err(CombatError::InsufficientResource {
                required: attack.cost,
                available: attacker_rec.mp,
            });
        }
        let defender_rec = self
            .store
            .get(&defender_name)
            .ok_or_else(|| CombatError::NotFound(format!("player '{defender_name}'")))?;
        let defender_level = defender_rec.level;

        // Resolution consumes rolls but mutates nothing.
        let resolution = resolve_attack(attacker_rec, defender_rec, &attack, &mut self.rng);

        // Mutation phase. Cost is paid even if the attack missed.
        self.store.update(attacker, |p| p.spend_mp(attack.cost))?;
        if resolution.damage > 0 {
            self.store
                .update(&defender_name, |p| p.apply_damage(resolution.damage))?;
        }
        let (defender_hp, defeated) = {
            let defender = self
                .store
                .get(&defender_name)
                .ok_or_else(|| CombatError::NotFound(format!("player '{defender_name}'")))?;
            (defender.hp, defender.is_defeated())
        };

        let mut entries = vec![format!("{attacker} uses {}!", attack.name)];
        if resolution.missed {
            entries.push(format!("{attacker}'s attack misses!"));
        } else if !attack.kind.deals_damage() {
            entries.push(format!("{} has no immediate effect.", attack.name));
        } else {
            if resolution.critical {
                entries.push("Critical hit!".to_string());
            }
            entries.push(format!(
                "{defender_name} takes {} damage ({defender_hp} hp remaining).",
                resolution.damage
            ));
        }

        tracing::debug!(
            session = %id,
            attacker,
            attack = %attack.name,
            damage = resolution.damage,
            missed = resolution.missed,
            critical = resolution.critical,
            "turn resolved"
        );

        if defeated {
            entries.push(format!("{defender_name} has been defeated!"));
            entries.push(format!("{attacker} is victorious!"));

            let mut report = None;
            self.store
                .update(attacker, |p| report = Some(award_victory(p, defender_level)))?;
            if let Some(report) = report {
                entries.push(format!(
                    "{attacker} gains {} experience.",
                    report.experience_gained
                ));
                if report.leveled_up {
                    entries.push(format!("{attacker} reached level {}!", report.level));
                }
            }

            if let Some(session) = self.sessions.get_mut(id) {
                for entry in &entries {
                    session.push_log(entry.clone());
                }
            }
            self.sessions.end_session(id);

            return Ok(TurnOutcome {
                log: entries,
                session_ended: true,
                next_turn: None,
            });
        }

        let session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| CombatError::NotFound(format!("{id}")))?;
        session.flip_turn();
        entries.push(format!("It's {}'s turn!", session.turn_holder()));
        let next_turn = session.turn_holder().to_string();
        for entry in &entries {
            session.push_log(entry.clone());
        }

        Ok(TurnOutcome {
            log: entries,
            session_ended: false,
            next_turn: Some(next_turn),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Role};

    fn engine() -> CombatEngine<InMemoryPlayerStore, CombatRng> {
        let mut engine = CombatEngine::with_seed(42);
        engine.store_mut().insert(Player::new("Arthas", Role::Warrior));
        engine.store_mut().insert(Player::new("Jaina", Role::Mage));
        engine
    }

    #[test]
    fn test_start_combat_response_shape() {
        let mut engine = engine();
        let start = engine.start_combat("Arthas", "Jaina").unwrap();

        assert_eq!(start.log.len(), 2);
        assert!(["Arthas", "Jaina"].contains(&start.first_turn.as_str()));
        assert_eq!(engine.active_sessions(), 1);
        assert_eq!(
            engine.session(start.session_id).unwrap().turn_holder(),
            start.first_turn
        );
    }

    #[test]
    fn test_list_attacks_by_role() {
        let engine = engine();

        let warrior_attacks = engine.list_attacks("Arthas").unwrap();
        assert_eq!(warrior_attacks[0].name, "Slash");
        assert_eq!(warrior_attacks[0].cost, 0);

        let mage_attacks = engine.list_attacks("Jaina").unwrap();
        assert!(mage_attacks.iter().any(|a| a.name == "Fireball"));

        let err = engine.list_attacks("ghost").unwrap_err();
        assert!(matches!(err, CombatError::NotFound(_)));
    }

    #[test]
    fn test_take_turn_unknown_session() {
        let mut engine = engine();
        let err = engine
            .take_turn(SessionId::new(99), "Arthas", "Slash")
            .unwrap_err();
        assert!(matches!(err, CombatError::NotFound(_)));
    }

    #[test]
    fn test_turn_outcome_serializes() {
        let outcome = TurnOutcome {
            log: vec!["Arthas uses Slash!".to_string()],
            session_ended: false,
            next_turn: Some("Jaina".to_string()),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: TurnOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
