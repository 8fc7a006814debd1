//! Secondary effects of an attack that landed.

use super::damage::self_heal_amount;
use crate::env::RngOracle;
use crate::state::{Attack, BattleState, EffectSpec, LegacyFlag, Side, StatusEffect, TransientFlags};

/// Rolls every status-bearing effect of `attack` against the attacker's opponent.
///
/// Legacy flags and explicit status effects roll independently, in the order
/// they appear on the attack, so one attack can trigger both.
pub fn apply_status_effect(
    state: &mut BattleState,
    attacker: Side,
    attack: &Attack,
    rng: &mut dyn RngOracle,
) {
    let target = attacker.opponent();
    for effect in &attack.effects {
        match *effect {
            EffectSpec::Flag(flag) => {
                if rng.chance(state.rules.legacy_effect_chance) {
                    apply_legacy_flag(state, target, flag);
                }
            }
            EffectSpec::InflictStatus { kind, chance } => {
                if rng.chance(f64::from(chance)) {
                    let attacker_unit = state.combatant(attacker);
                    let status = StatusEffect::inflict(
                        kind,
                        state.rules.status_duration,
                        attacker_unit.attack,
                        state.combatant(target).max_health,
                        attacker_unit.name.clone(),
                    );
                    let victim = state.combatant_mut(target);
                    victim.status_effects.push(status);
                    let line = format!("{} is afflicted with {kind}!", victim.name);
                    state.log.push(line);
                }
            }
            _ => {}
        }
    }
}

fn apply_legacy_flag(state: &mut BattleState, target: Side, flag: LegacyFlag) {
    let name = state.combatant(target).name.clone();
    match (flag, target) {
        (LegacyFlag::Burn, Side::Boss) => {
            state.flags.insert(TransientFlags::BOSS_BURNING);
            state.log.push(format!("{name} is burning!"));
        }
        (LegacyFlag::Burn, Side::Player) => {
            state.flags.insert(TransientFlags::PLAYER_BURNING);
            state.log.push(format!("{name} is burning!"));
        }
        (LegacyFlag::Stun, Side::Boss) => {
            state.flags.insert(TransientFlags::BOSS_STUNNED);
            state.log.push(format!("{name} is stunned!"));
        }
        // Heroes have no stun flag; the proc is narrated only.
        (LegacyFlag::Stun, Side::Player) => {
            state.log.push(format!("{name} is stunned!"));
        }
        (LegacyFlag::Slow, Side::Player) => {
            state.flags.insert(TransientFlags::PLAYER_SLOWED);
            state.log.push(format!("{name} is slowed!"));
        }
        (LegacyFlag::Slow, Side::Boss) => {}
    }
}

/// Applies heal, self-heal, barrier and dodge effects for the attacker.
pub fn apply_attacker_effects(state: &mut BattleState, attacker: Side, attack: &Attack) {
    if let Some(amount) = attack.heal() {
        let unit = state.combatant_mut(attacker);
        unit.heal(amount);
        let line = format!("{} healed for {amount} health!", unit.name);
        state.log.push(line);
    }

    if let Some(base) = attack.self_heal() {
        let unit = state.combatant_mut(attacker);
        let amount = self_heal_amount(base, unit.attack);
        unit.heal(amount);
        let line = format!("{} healed for {amount} health!", unit.name);
        state.log.push(line);
    }

    if let Some(amount) = attack.barrier() {
        state.barrier = amount;
        let line = format!(
            "{} gained a barrier of {amount}!",
            state.combatant(attacker).name
        );
        state.log.push(line);
    }

    if attack.grants_dodge() {
        state.flags.insert(TransientFlags::PLAYER_DODGING);
        let line = format!("{} is dodging attacks!", state.combatant(attacker).name);
        state.log.push(line);
    }
}
