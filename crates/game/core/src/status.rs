//! Turn-start status processing.

use crate::env::RngOracle;
use crate::state::{BattleState, Side, TransientFlags};

/// Applies recurring effects at the start of `side`'s turn.
///
/// A burning boss takes `player.attack / 4` first and may shake the flag off
/// afterwards. Then every listed effect deals its damage and loses one turn of
/// duration, in insertion order; expired effects are dropped. Returns the total
/// damage taken.
pub fn process_status_effects(state: &mut BattleState, side: Side, rng: &mut dyn RngOracle) -> u32 {
    let mut total = 0;

    if side == Side::Boss && state.flags.contains(TransientFlags::BOSS_BURNING) {
        let burn = state.player.attack / 4;
        total += state.boss.unit.take_damage(burn);
        let name = state.boss.unit.name.clone();
        state.log.push(format!("{name} takes {burn} burn damage!"));

        if state.boss.unit.is_defeated() {
            state
                .log
                .push(format!("{name} has been defeated by burn damage!"));
            state.active = false;
            return total;
        }

        if rng.chance(state.rules.legacy_burn_clear_chance) {
            state.flags.remove(TransientFlags::BOSS_BURNING);
            state.log.push(format!("{name} is no longer burning."));
        }
    }

    let unit = state.combatant_mut(side);
    if unit.status_effects.is_empty() {
        return total;
    }

    let mut lines = Vec::new();
    for effect in &mut unit.status_effects {
        if let Some(damage) = effect.damage_per_turn.filter(|damage| *damage > 0) {
            let lost = damage.min(unit.current_health);
            unit.current_health -= lost;
            total += lost;
            lines.push(format!("{} took {damage} damage from {}!", unit.name, effect.kind));
        }
        effect.duration = effect.duration.saturating_sub(1);
    }
    for expired in unit.status_effects.iter().filter(|effect| effect.is_expired()) {
        lines.push(format!("{} is no longer affected by {}.", unit.name, expired.kind));
    }
    unit.status_effects.retain(|effect| !effect.is_expired());

    for line in lines {
        state.log.push(line);
    }
    state.check_defeat(side);
    total
}

/// True when `side` must forfeit its turn. Never mutates.
pub fn should_skip_turn(state: &BattleState, side: Side) -> bool {
    (side == Side::Boss && state.flags.contains(TransientFlags::BOSS_STUNNED))
        || state.combatant(side).has_skip_turn_effect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::env::ScriptedRng;
    use crate::state::{Boss, Combatant, StatusEffect, StatusKind};

    fn battle() -> BattleState {
        let player = Combatant::new("archer", "Archer", 130).with_stats(18, 6, 15);
        let boss = Boss::new(Combatant::new("vex", "Vex", 150).with_stats(20, 10, 15));
        BattleState::new(player, boss, Vec::new(), BattleConfig::default())
    }

    #[test]
    fn boss_burn_ticks_then_may_clear() {
        let mut state = battle();
        state.flags.insert(TransientFlags::BOSS_BURNING);

        let dealt = process_status_effects(&mut state, Side::Boss, &mut ScriptedRng::new([50.0]));
        assert_eq!(dealt, 4);
        assert_eq!(state.boss.unit.current_health, 146);
        assert!(state.flags.contains(TransientFlags::BOSS_BURNING));
        assert_eq!(state.log.last(), Some("Vex takes 4 burn damage!"));

        process_status_effects(&mut state, Side::Boss, &mut ScriptedRng::new([29.0]));
        assert!(!state.flags.contains(TransientFlags::BOSS_BURNING));
        assert_eq!(state.log.last(), Some("Vex is no longer burning."));
    }

    #[test]
    fn lethal_burn_ends_battle_before_clear_roll() {
        let mut state = battle();
        state.flags.insert(TransientFlags::BOSS_BURNING);
        state.boss.unit.current_health = 3;
        let mut rng = ScriptedRng::new([0.0]);
        process_status_effects(&mut state, Side::Boss, &mut rng);
        assert!(!state.active);
        assert_eq!(rng.remaining(), 1);
        assert_eq!(state.log.last(), Some("Vex has been defeated by burn damage!"));
    }

    #[test]
    fn player_burning_flag_deals_no_damage() {
        let mut state = battle();
        state.flags.insert(TransientFlags::PLAYER_BURNING);
        assert_eq!(process_status_effects(&mut state, Side::Player, &mut ScriptedRng::default()), 0);
        assert_eq!(state.player.current_health, 130);
    }

    #[test]
    fn fresh_effect_lasts_exactly_three_ticks() {
        let mut state = battle();
        state
            .player
            .status_effects
            .push(StatusEffect::inflict(StatusKind::Poison, 3, 0, 130, "Vex"));

        for tick in 1..=3 {
            assert_eq!(state.player.status_effects.len(), 1, "present before tick {tick}");
            let dealt = process_status_effects(&mut state, Side::Player, &mut ScriptedRng::default());
            assert_eq!(dealt, 6);
        }
        assert!(state.player.status_effects.is_empty());
        assert_eq!(state.player.current_health, 130 - 18);
        assert_eq!(state.log.last(), Some("Archer is no longer affected by poison."));
    }

    #[test]
    fn effects_tick_in_insertion_order() {
        let mut state = battle();
        state.player.status_effects.extend([
            StatusEffect::inflict(StatusKind::Burn, 1, 20, 0, "Vex"),
            StatusEffect::inflict(StatusKind::Poison, 2, 0, 130, "Vex"),
            StatusEffect::inflict(StatusKind::Slow, 3, 0, 0, "Vex"),
        ]);
        let mark = state.log.len();
        process_status_effects(&mut state, Side::Player, &mut ScriptedRng::default());

        assert_eq!(
            state.log.since(mark),
            [
                "Archer took 4 damage from burn!",
                "Archer took 6 damage from poison!",
                "Archer is no longer affected by burn.",
            ]
        );
        let remaining: Vec<_> = state.player.status_effects.iter().map(|e| (e.kind, e.duration)).collect();
        assert_eq!(remaining, [(StatusKind::Poison, 1), (StatusKind::Slow, 2)]);
    }

    #[test]
    fn damage_over_time_can_defeat() {
        let mut state = battle();
        state.player.current_health = 4;
        state
            .player
            .status_effects
            .push(StatusEffect::inflict(StatusKind::Poison, 3, 0, 130, "Vex"));
        process_status_effects(&mut state, Side::Player, &mut ScriptedRng::default());
        assert_eq!(state.player.current_health, 0);
        assert!(!state.active);
        assert_eq!(state.log.last(), Some("Archer has been defeated!"));
    }

    #[test]
    fn skip_turn_reports_without_mutating() {
        let mut state = battle();
        assert!(!should_skip_turn(&state, Side::Boss));

        state.flags.insert(TransientFlags::BOSS_STUNNED);
        assert!(should_skip_turn(&state, Side::Boss));
        assert!(!should_skip_turn(&state, Side::Player));
        assert!(state.flags.contains(TransientFlags::BOSS_STUNNED));

        state
            .player
            .status_effects
            .push(StatusEffect::inflict(StatusKind::Stun, 3, 0, 130, "Vex"));
        assert!(should_skip_turn(&state, Side::Player));
    }
}
