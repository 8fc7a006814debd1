//! Boss phase transitions and end-of-turn cooldowns.

use crate::state::BattleState;

/// Advances the boss to the first later phase whose threshold its health has
/// dropped to. Returns the new phase index, if any.
///
/// Phases only move forward: healing back above a threshold never reverts one.
pub fn check_phase_transition(state: &mut BattleState) -> Option<usize> {
    let boss = &state.boss;
    let fraction = boss.unit.health_fraction();
    let next = (boss.current_phase + 1..=boss.phases.len())
        .find(|&index| boss.phase(index).is_some_and(|phase| fraction <= phase.health_threshold))?;
    transition_to_phase(state, next).then_some(next)
}

/// Enters phase `index` (1-based), scaling attack and defense and refreshing
/// every boss cooldown.
///
/// Returns false, changing nothing, if `index` is unknown or not ahead of the
/// current phase.
pub fn transition_to_phase(state: &mut BattleState, index: usize) -> bool {
    let boss = &mut state.boss;
    if index <= boss.current_phase {
        return false;
    }
    let Some(phase) = boss.phase(index).copied() else {
        return false;
    };

    boss.current_phase = index;
    let unit = &mut boss.unit;
    let old_attack = unit.attack;
    let old_defense = unit.defense;
    unit.attack = (f64::from(unit.attack) * phase.attack_multiplier).floor() as u32;
    unit.defense = (f64::from(unit.defense) * phase.defense_multiplier).floor() as u32;
    unit.reset_cooldowns();

    let name = unit.name.clone();
    let (attack, defense) = (unit.attack, unit.defense);
    state
        .log
        .push(format!("{name} enters a new phase and grows stronger!"));
    if attack > old_attack {
        state.log.push(format!("{name}'s attack increased!"));
    }
    if defense != old_defense {
        let change = if defense > old_defense {
            "increased"
        } else {
            "decreased"
        };
        state.log.push(format!("{name}'s defense {change}!"));
    }
    true
}

/// Boss turn bookkeeping: every boss cooldown drops by one, floored at 0.
pub fn process_end_of_turn(state: &mut BattleState) {
    state.boss.unit.tick_cooldowns();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::state::{Attack, AttackType, Boss, Combatant, Phase};

    fn phase(health_threshold: f64, attack_multiplier: f64, defense_multiplier: f64) -> Phase {
        Phase {
            health_threshold,
            attack_multiplier,
            defense_multiplier,
        }
    }

    fn battle(phases: Vec<Phase>) -> BattleState {
        let boss = Boss::new(
            Combatant::new("dragon", "Ancient Fire Dragon", 200)
                .with_stats(25, 15, 12)
                .with_attacks(vec![
                    Attack::new("breath", "Fire Breath", 35, AttackType::Magical).with_cooldown(3),
                    Attack::new("claw", "Claw Strike", 28, AttackType::Physical).with_cooldown(1),
                ]),
        )
        .with_phases(phases);
        let player = Combatant::new("knight", "Knight", 150).with_stats(15, 10, 10);
        BattleState::new(player, boss, Vec::new(), BattleConfig::default())
    }

    #[test]
    fn half_health_enters_phase_once() {
        let mut state = battle(vec![phase(0.5, 1.3, 1.1)]);
        state.boss.unit.current_health = 100;
        state.boss.unit.attacks[0].current_cooldown = 3;
        state.boss.unit.attacks[1].current_cooldown = 1;

        assert_eq!(check_phase_transition(&mut state), Some(1));
        assert_eq!(state.boss.current_phase, 1);
        assert_eq!(state.boss.unit.attack, 32);
        assert_eq!(state.boss.unit.defense, 16);
        assert!(state.boss.unit.attacks.iter().all(Attack::is_ready));
        assert!(state.log.contains("Ancient Fire Dragon enters a new phase and grows stronger!"));
        assert!(state.log.contains("Ancient Fire Dragon's attack increased!"));
        assert!(state.log.contains("Ancient Fire Dragon's defense increased!"));

        assert_eq!(check_phase_transition(&mut state), None);
        assert_eq!(state.boss.unit.attack, 32);
    }

    #[test]
    fn above_threshold_stays_in_base_form() {
        let mut state = battle(vec![phase(0.5, 1.3, 1.1)]);
        state.boss.unit.current_health = 101;
        assert_eq!(check_phase_transition(&mut state), None);
        assert_eq!(state.boss.current_phase, 0);
    }

    #[test]
    fn big_drop_takes_first_matching_phase_only() {
        let mut state = battle(vec![
            phase(0.75, 1.2, 1.0),
            phase(0.5, 1.4, 1.1),
            phase(0.25, 1.6, 1.2),
        ]);
        state.boss.unit.current_health = 40;
        assert_eq!(check_phase_transition(&mut state), Some(1));
        assert_eq!(check_phase_transition(&mut state), Some(2));
        assert_eq!(check_phase_transition(&mut state), Some(3));
        assert_eq!(check_phase_transition(&mut state), None);
    }

    #[test]
    fn healing_never_reverts_phase() {
        let mut state = battle(vec![phase(0.5, 1.3, 1.1)]);
        state.boss.unit.current_health = 90;
        check_phase_transition(&mut state);
        state.boss.unit.heal(200);
        check_phase_transition(&mut state);
        assert_eq!(state.boss.current_phase, 1);
        assert!(!transition_to_phase(&mut state, 0));
        assert!(!transition_to_phase(&mut state, 1));
    }

    #[test]
    fn defense_drop_is_reported() {
        let mut state = battle(vec![phase(0.3, 1.5, 0.7)]);
        state.boss.unit.current_health = 60;
        check_phase_transition(&mut state);
        assert_eq!(state.boss.unit.defense, 10);
        assert!(state.log.contains("Ancient Fire Dragon's defense decreased!"));
    }

    #[test]
    fn end_of_turn_ticks_boss_cooldowns() {
        let mut state = battle(Vec::new());
        state.boss.unit.attacks[0].current_cooldown = 3;
        process_end_of_turn(&mut state);
        process_end_of_turn(&mut state);
        assert_eq!(state.boss.unit.attacks[0].current_cooldown, 1);
        assert_eq!(state.boss.unit.attacks[1].current_cooldown, 0);
    }
}
