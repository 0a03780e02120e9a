//! Shared fixtures: scripted roll sources and canned players.

use std::collections::VecDeque;

use lostcastle::core::{Player, RandomSource, Role};
use lostcastle::engine::CombatEngine;
use lostcastle::store::{InMemoryPlayerStore, PlayerStore};

/// Roll source with pre-scripted outcomes.
///
/// `chance` pops from the front of the check queue (default `false`
/// when exhausted); `uniform` pops from the variance queue (default
/// `1.0`). The engine consumes rolls in a fixed order - coin flip at
/// combat start, then per damaging turn: miss check, variance, crit
/// check - so scripts can pin every outcome.
pub struct ScriptedRng {
    checks: VecDeque<bool>,
    variances: VecDeque<f32>,
}

impl ScriptedRng {
    pub fn new(checks: &[bool], variances: &[f32]) -> Self {
        Self {
            checks: checks.iter().copied().collect(),
            variances: variances.iter().copied().collect(),
        }
    }

    /// All checks false, all variances 1.0: the coin flip sends the
    /// second participant first, nothing misses, nothing crits.
    pub fn calm() -> Self {
        Self::new(&[], &[])
    }
}

impl RandomSource for ScriptedRng {
    fn chance(&mut self, _probability: f64) -> bool {
        self.checks.pop_front().unwrap_or(false)
    }

    fn uniform(&mut self, _lo: f32, _hi: f32) -> f32 {
        self.variances.pop_front().unwrap_or(1.0)
    }
}

/// Engine with Arthas (Warrior) and Jaina (Mage) registered.
pub fn duel_engine(rng: ScriptedRng) -> CombatEngine<InMemoryPlayerStore, ScriptedRng> {
    let mut store = InMemoryPlayerStore::new();
    store.insert(Player::new("Arthas", Role::Warrior));
    store.insert(Player::new("Jaina", Role::Mage));
    CombatEngine::new(store, rng)
}
