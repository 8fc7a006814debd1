//! Damage formulas.
//!
//! ```text
//! single hit : floor(max(1, damage + atk/10 - def/20) * crit)
//! multi strike: floor(max(1, floor(scale * (damage + atk/10)) - def/30))
//! self heal  : floor(amount + atk/20)
//! ```
//!
//! Divisions are real-valued; flooring happens only where shown.

use crate::config::BattleConfig;

/// Damage of a single-hit attack after defense, with the crit applied.
pub fn single_hit_damage(
    base_damage: u32,
    attacker_attack: u32,
    target_defense: u32,
    critical: bool,
    rules: &BattleConfig,
) -> u32 {
    let raw = f64::from(base_damage) + f64::from(attacker_attack) / 10.0;
    let mut damage = (raw - f64::from(target_defense) / 20.0).max(1.0);
    if critical {
        damage *= rules.crit_multiplier;
    }
    damage.floor() as u32
}

/// Damage of one connecting strike of a multi-hit attack.
pub fn multi_hit_strike_damage(
    base_damage: u32,
    attacker_attack: u32,
    target_defense: u32,
    rules: &BattleConfig,
) -> u32 {
    let raw = f64::from(base_damage) + f64::from(attacker_attack) / 10.0;
    let scaled = (raw * rules.multi_hit_scale).floor();
    (scaled - f64::from(target_defense) / 30.0).max(1.0).floor() as u32
}

/// Health restored by a self-heal effect.
pub fn self_heal_amount(amount: u32, attacker_attack: u32) -> u32 {
    (f64::from(amount) + f64::from(attacker_attack) / 20.0).floor() as u32
}
