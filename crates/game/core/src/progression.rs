//! Leveling math and battle rewards.
//!
//! Pure functions only; the runtime's experience service applies them to the
//! saved roster.

use crate::config::BattleConfig;
use crate::env::CharacterClass;
use crate::state::{Boss, Combatant};

/// Experience needed to go from `level - 1` to `level`.
///
/// `floor(100 * 1.2^(level - 2))`, computed in integers so large levels stay
/// exact. Levels 1 and below cost nothing.
pub fn xp_for_next_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let steps = level - 2;
    let exact = 6u128
        .checked_pow(steps)
        .and_then(|power| power.checked_mul(100))
        .map(|numerator| numerator / 5u128.pow(steps));
    exact
        .and_then(|cost| u64::try_from(cost).ok())
        .unwrap_or(u64::MAX)
}

/// Cumulative experience required to reach `level` from level 1.
pub fn xp_required_for_level(level: u32) -> u64 {
    (2..=level).map(xp_for_next_level).fold(0u64, u64::saturating_add)
}

/// Highest level `experience` reaches, capped at `max_level`.
pub fn level_for_experience(experience: u64, max_level: u32) -> u32 {
    let mut level = 1;
    while level < max_level && experience >= xp_required_for_level(level + 1) {
        level += 1;
    }
    level
}

/// Combat weight used to compare the two sides.
fn strength(unit: &Combatant) -> f64 {
    f64::from(unit.max_health) + 2.0 * f64::from(unit.attack) + f64::from(unit.defense)
}

/// Experience for beating `boss`.
///
/// `base * boss_level * difficulty * level_mult * tier_mult`, floored, where
/// difficulty compares strengths (clamped to `[0.5, 3]`) and level_mult rewards
/// fighting above your level (floored at 0.3).
pub fn battle_xp(player: &Combatant, player_level: u32, boss: &Boss, rules: &BattleConfig) -> u32 {
    let player_strength = strength(player).max(1.0);
    let difficulty = (strength(&boss.unit) / player_strength).clamp(0.5, 3.0);

    let boss_level = boss.unit.level.max(1);
    let level_gap = f64::from(boss_level) - f64::from(player_level);
    let level_mult = (1.0 + 0.15 * level_gap).max(0.3);

    let xp = f64::from(rules.base_battle_xp)
        * f64::from(boss_level)
        * difficulty
        * level_mult
        * boss.tier.xp_multiplier();
    xp.floor() as u32
}

/// Consolation granted after a loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefeatRewards {
    pub gold: u32,
    pub experience: u32,
}

pub fn defeat_rewards(player_level: u32, rules: &BattleConfig) -> DefeatRewards {
    DefeatRewards {
        gold: rules.defeat_gold(player_level),
        experience: rules.defeat_xp,
    }
}

/// Skills unlocked on reaching `level`.
pub fn skills_learned_at(class: CharacterClass, level: u32) -> Vec<&'static str> {
    let mut skills = Vec::new();
    match level {
        3 => skills.push("Enhanced Combat"),
        5 => skills.push("Veteran Fighter"),
        7 => skills.push("Master Warrior"),
        10 => skills.push("Legendary Hero"),
        _ => {}
    }
    if class == CharacterClass::Paladin {
        match level {
            4 => skills.push("Divine Favor"),
            8 => skills.push("Aura of Protection"),
            _ => {}
        }
    }
    skills
}
