//! Progression: experience awards and level-ups.
//!
//! Runs when a combatant defeats an opponent. Experience gain scales
//! with the defeated player's level. At most one level-up is evaluated
//! per victory, and excess experience past the threshold is discarded -
//! both are deliberate, documented policy, not bugs.

use crate::core::Player;

/// Experience gained per level of the defeated opponent.
pub const XP_PER_LEVEL_KILL: u32 = 12;

/// Growth factor applied to the next-level threshold on level-up
/// (result rounded down).
pub const XP_GROWTH_FACTOR: f32 = 1.5;

/// Stat growth on level-up.
pub const LEVEL_UP_HP_GAIN: i32 = 10;
pub const LEVEL_UP_MP_GAIN: i32 = 5;
pub const LEVEL_UP_ATTACK_GAIN: i32 = 2;
pub const LEVEL_UP_DEFENSE_GAIN: i32 = 1;
pub const LEVEL_UP_MAGIC_GAIN: i32 = 2;

/// What a victory did to the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VictoryReport {
    pub experience_gained: u32,
    pub leveled_up: bool,
    /// Winner's level after the award.
    pub level: u32,
}

/// Award a victory over an opponent of `defeated_level`.
///
/// Adds `defeated_level * XP_PER_LEVEL_KILL` experience, then evaluates
/// the level-up threshold exactly once.
pub fn award_victory(winner: &mut Player, defeated_level: u32) -> VictoryReport {
    let gained = defeated_level.saturating_mul(XP_PER_LEVEL_KILL);
    winner.experience = winner.experience.saturating_add(gained);

    let leveled_up = winner.experience >= winner.experience_to_next;
    if leveled_up {
        level_up(winner);
    }

    tracing::debug!(
        winner = %winner.name,
        gained,
        leveled_up,
        level = winner.level,
        "victory awarded"
    );

    VictoryReport {
        experience_gained: gained,
        leveled_up,
        level: winner.level,
    }
}

/// Apply one level-up: stat growth, threshold scaling, full restore.
///
/// Experience resets to zero - overshoot past the threshold is
/// discarded.
pub fn level_up(player: &mut Player) {
    player.level += 1;
    player.experience = 0;
    player.experience_to_next = (player.experience_to_next as f32 * XP_GROWTH_FACTOR) as u32;

    player.max_hp += LEVEL_UP_HP_GAIN;
    player.max_mp += LEVEL_UP_MP_GAIN;
    player.attack += LEVEL_UP_ATTACK_GAIN;
    player.defense += LEVEL_UP_DEFENSE_GAIN;
    player.magic_power += LEVEL_UP_MAGIC_GAIN;

    // Level-up is also a full heal.
    player.restore_all();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    #[test]
    fn test_award_below_threshold() {
        let mut p = Player::new("Arthas", Role::Warrior);
        let report = award_victory(&mut p, 3);

        assert_eq!(report.experience_gained, 36);
        assert!(!report.leveled_up);
        assert_eq!(p.level, 1);
        assert_eq!(p.experience, 36);
    }

    #[test]
    fn test_level_up_on_threshold() {
        let mut p = Player::new("Arthas", Role::Warrior);
        p.experience = 90;
        p.hp = 30;
        p.mp = 2;

        // 90 + 12 >= 100 triggers exactly one level-up.
        let report = award_victory(&mut p, 1);

        assert!(report.leveled_up);
        assert_eq!(report.level, 2);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 0, "overshoot is discarded");
        assert_eq!(p.experience_to_next, 150);
    }

    #[test]
    fn test_level_up_is_full_heal() {
        let mut p = Player::new("Jaina", Role::Mage);
        p.experience = 99;
        p.hp = 1;
        p.mp = 0;

        award_victory(&mut p, 1);

        assert_eq!(p.hp, p.max_hp);
        assert_eq!(p.mp, p.max_mp);
        assert_eq!(p.max_hp, 90 + LEVEL_UP_HP_GAIN);
        assert_eq!(p.max_mp, 60 + LEVEL_UP_MP_GAIN);
    }

    #[test]
    fn test_stat_growth() {
        let mut p = Player::new("Arthas", Role::Warrior);
        level_up(&mut p);

        assert_eq!(p.attack, 15 + LEVEL_UP_ATTACK_GAIN);
        assert_eq!(p.defense, 10 + LEVEL_UP_DEFENSE_GAIN);
        assert_eq!(p.magic_power, 5 + LEVEL_UP_MAGIC_GAIN);
    }

    #[test]
    fn test_single_level_up_per_victory() {
        let mut p = Player::new("Arthas", Role::Warrior);
        p.experience = 99;

        // Defeating a level-50 opponent grants 600 xp, enough for
        // several thresholds, but only one level-up is evaluated.
        let report = award_victory(&mut p, 50);

        assert!(report.leveled_up);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 0);
    }

    #[test]
    fn test_threshold_rounds_down() {
        let mut p = Player::new("Arthas", Role::Warrior);
        p.experience_to_next = 225;
        level_up(&mut p);

        // 225 * 1.5 = 337.5, floored.
        assert_eq!(p.experience_to_next, 337);
    }

    #[test]
    fn test_zero_level_opponent_awards_nothing() {
        let mut p = Player::new("Arthas", Role::Warrior);
        let report = award_victory(&mut p, 0);

        assert_eq!(report.experience_gained, 0);
        assert!(!report.leveled_up);
    }
}
