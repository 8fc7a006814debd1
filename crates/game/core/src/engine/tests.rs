use super::*;
use crate::config::BattleConfig;
use crate::env::ScriptedRng;
use crate::error::GameError;
use crate::state::{
    Attack, AttackType, Boss, Combatant, Item, StatusEffect, StatusKind,
};

fn hero() -> Combatant {
    Combatant::new("knight", "Knight", 100)
        .with_stats(10, 5, 10)
        .with_attacks(vec![
            Attack::new("slash", "Slash", 20, AttackType::Physical).with_accuracy(100),
            Attack::new("heavy", "Heavy Blow", 30, AttackType::Physical)
                .with_accuracy(100)
                .with_cooldown(3),
        ])
}

fn boss() -> Boss {
    Boss::new(
        Combatant::new("dragon", "Dragon", 200)
            .with_stats(25, 8, 5)
            .with_attacks(vec![
                Attack::new("claw", "Claw Strike", 28, AttackType::Physical)
                    .with_accuracy(100)
                    .with_cooldown(1),
            ]),
    )
    .with_gold_reward(100)
}

fn battle() -> BattleState {
    let inventory = vec![
        Item::new("potion", "Health Potion", ItemKind::Health, 50),
        Item::new("charm", "Lucky Charm", ItemKind::Other, 0).reusable(),
        Item::new("elixir", "Cleansing Elixir", ItemKind::Cleanse, 0),
        Item::new("tonic", "Strength Tonic", ItemKind::Attack, 5),
    ];
    BattleState::new(hero(), boss(), inventory, BattleConfig::default())
}

#[test]
fn player_attack_hands_turn_to_boss() {
    let mut state = battle();
    let mut rng = ScriptedRng::default();
    let outcome = BattleEngine::new(&mut state, &mut rng).use_attack(0).unwrap();

    assert!(matches!(outcome.action, TurnAction::Attack(ref result) if result.damage() == 20));
    assert_eq!(outcome.resolution, None);
    assert_eq!(state.boss.unit.current_health, 180);
    assert_eq!(state.phase, BattlePhase::BossTurnPending);
    assert_eq!(state.turn_count, 0);
}

#[test]
fn refused_actions_leave_state_untouched() {
    let mut state = battle();
    let mut rng = ScriptedRng::default();
    let before = state.clone();

    let mut engine = BattleEngine::new(&mut state, &mut rng);
    assert_eq!(
        engine.use_attack(7),
        Err(ActionError::UnknownAttackSlot { slot: 7, available: 2 })
    );
    assert!(matches!(
        engine.use_item("missing"),
        Err(ActionError::ItemNotInInventory { .. })
    ));
    assert!(matches!(
        engine.process_boss_turn(),
        Err(ActionError::NotBossTurn { phase: BattlePhase::PlayerTurn })
    ));
    assert_eq!(state, before);
}

#[test]
fn actions_outside_player_turn_are_refused() {
    let mut state = battle();
    state.phase = BattlePhase::BossTurnPending;
    let mut rng = ScriptedRng::default();
    let mut engine = BattleEngine::new(&mut state, &mut rng);
    assert_eq!(
        engine.use_attack(0),
        Err(ActionError::NotPlayerTurn {
            phase: BattlePhase::BossTurnPending
        })
    );

    state.active = false;
    let mut engine = BattleEngine::new(&mut state, &mut rng);
    assert_eq!(engine.use_attack(0), Err(ActionError::BattleInactive));
    assert_eq!(engine.process_boss_turn(), Err(ActionError::BattleInactive));
}

#[test]
fn cooling_attack_is_refused() {
    let mut state = battle();
    state.player.attacks[1].current_cooldown = 2;
    let mut rng = ScriptedRng::default();
    let err = BattleEngine::new(&mut state, &mut rng)
        .use_attack(1)
        .unwrap_err();
    assert_eq!(
        err,
        ActionError::AttackOnCooldown {
            name: "Heavy Blow".into(),
            remaining: 2
        }
    );
    assert_eq!(err.severity(), crate::ErrorSeverity::Recoverable);
}

#[test]
fn full_round_runs_boss_turn_and_counts() {
    let mut state = battle();
    let mut rng = ScriptedRng::default();
    let mut engine = BattleEngine::new(&mut state, &mut rng);
    engine.use_attack(1).unwrap();
    let outcome = engine.process_boss_turn().unwrap();

    assert!(matches!(outcome.action, TurnAction::Attack(ref result) if result.damage() == 30));
    assert_eq!(state.player.current_health, 70);
    assert_eq!(state.phase, BattlePhase::PlayerTurn);
    assert_eq!(state.turn_count, 1);
    // used (3), ticked at player turn end (2)
    assert_eq!(state.player.attacks[1].current_cooldown, 2);
    // used (1), ticked at boss turn end (0)
    assert_eq!(state.boss.unit.attacks[0].current_cooldown, 0);
}

#[test]
fn cooldown_ticks_once_per_owner_turn() {
    let mut state = battle();
    state.player.max_health = 500;
    state.player.current_health = 500;
    let mut rng = ScriptedRng::default();
    let mut engine = BattleEngine::new(&mut state, &mut rng);
    engine.use_attack(1).unwrap();

    let mut seen = Vec::new();
    for _ in 0..4 {
        engine.process_boss_turn().unwrap();
        seen.push(engine.state().player.attacks[1].current_cooldown);
        engine.use_attack(0).unwrap();
    }
    assert_eq!(seen, [2, 1, 0, 0]);
}

#[test]
fn stunned_boss_loses_its_turn() {
    let mut state = battle();
    state.phase = BattlePhase::BossTurnPending;
    state.flags.insert(TransientFlags::BOSS_STUNNED);
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng)
        .process_boss_turn()
        .unwrap();
    assert_eq!(outcome.action, TurnAction::Skipped);
    assert!(!state.flags.contains(TransientFlags::BOSS_STUNNED));
    assert_eq!(state.player.current_health, 100);
    assert!(state.log.contains("Dragon is stunned and skips a turn!"));
    assert_eq!(state.phase, BattlePhase::PlayerTurn);
}

#[test]
fn boss_charges_when_everything_cools_down() {
    let mut state = battle();
    state.phase = BattlePhase::BossTurnPending;
    state.boss.unit.attacks[0].current_cooldown = 1;
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng)
        .process_boss_turn()
        .unwrap();
    assert_eq!(outcome.action, TurnAction::Charged);
    assert_eq!(state.player.current_health, 100);
    assert_eq!(state.boss.unit.attacks[0].current_cooldown, 0);
    assert_eq!(state.turn_count, 1);
}

#[test]
fn lethal_player_hit_is_victory_without_turn_end() {
    let mut state = battle();
    state.boss.unit.current_health = 15;
    state.player.attacks[1].current_cooldown = 0;
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng).use_attack(1).unwrap();
    assert_eq!(outcome.resolution, Some(Outcome::Victory));
    assert_eq!(state.phase, BattlePhase::Resolved(Outcome::Victory));
    assert!(!state.active);
    // still on full cooldown: the turn never ended
    assert_eq!(state.player.attacks[1].current_cooldown, 3);
}

#[test]
fn boss_kill_resolves_defeat() {
    let mut state = battle();
    state.phase = BattlePhase::BossTurnPending;
    state.player.current_health = 20;
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng)
        .process_boss_turn()
        .unwrap();
    assert_eq!(outcome.resolution, Some(Outcome::Defeat));
    assert_eq!(state.phase, BattlePhase::Resolved(Outcome::Defeat));
    assert_eq!(state.log.last(), Some("Knight has been defeated!"));
    assert_eq!(state.turn_count, 0);
}

#[test]
fn burning_boss_can_die_before_acting() {
    let mut state = battle();
    state.phase = BattlePhase::BossTurnPending;
    state.flags.insert(TransientFlags::BOSS_BURNING);
    state.boss.unit.current_health = 2;
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng)
        .process_boss_turn()
        .unwrap();
    assert_eq!(outcome.action, TurnAction::Succumbed);
    assert_eq!(outcome.resolution, Some(Outcome::Victory));
    assert_eq!(state.player.current_health, 100);
}

#[test]
fn stunned_player_forfeits_turn_after_status_tick() {
    let mut state = battle();
    state
        .player
        .status_effects
        .push(StatusEffect::inflict(StatusKind::Stun, 1, 0, 100, "Dragon"));
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng).use_attack(0).unwrap();
    // a one-turn stun expires during the tick, so the player acts
    assert!(matches!(outcome.action, TurnAction::Attack(_)));

    let mut state = battle();
    state
        .player
        .status_effects
        .push(StatusEffect::inflict(StatusKind::Stun, 3, 0, 100, "Dragon"));
    let outcome = BattleEngine::new(&mut state, &mut rng).use_attack(0).unwrap();
    assert_eq!(outcome.action, TurnAction::Skipped);
    assert_eq!(state.boss.unit.current_health, 200);
    assert_eq!(state.phase, BattlePhase::BossTurnPending);
    assert!(state.log.contains("Knight is unable to act this turn!"));
}

#[test]
fn poison_can_fell_player_at_turn_start() {
    let mut state = battle();
    state.player.current_health = 3;
    state
        .player
        .status_effects
        .push(StatusEffect::inflict(StatusKind::Poison, 3, 0, 100, "Dragon"));
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng).use_attack(0).unwrap();
    assert_eq!(outcome.action, TurnAction::Succumbed);
    assert_eq!(outcome.resolution, Some(Outcome::Defeat));
    assert_eq!(state.boss.unit.current_health, 200);
}

#[test]
fn items_apply_and_consume() {
    let mut state = battle();
    state.player.current_health = 30;
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng).use_item("potion").unwrap();
    assert_eq!(outcome.action, TurnAction::Item { item_id: "potion".into() });
    assert_eq!(state.player.current_health, 80);
    assert!(state.inventory.iter().all(|item| item.id != "potion"));
    assert_eq!(state.log.last(), Some("Knight uses Health Potion and heals for 50 health!"));
    assert_eq!(state.phase, BattlePhase::BossTurnPending);

    state.phase = BattlePhase::PlayerTurn;
    BattleEngine::new(&mut state, &mut rng).use_item("charm").unwrap();
    assert!(state.inventory.iter().any(|item| item.id == "charm"));
    assert_eq!(state.log.last(), Some("Knight uses Lucky Charm!"));

    state.phase = BattlePhase::PlayerTurn;
    BattleEngine::new(&mut state, &mut rng).use_item("tonic").unwrap();
    assert_eq!(state.player.attack, 15);
}

#[test]
fn stat_items_saturate() {
    let mut state = battle();
    state.player.attack = u32::MAX - 1;
    let mut rng = ScriptedRng::default();
    BattleEngine::new(&mut state, &mut rng).use_item("tonic").unwrap();
    assert_eq!(state.player.attack, u32::MAX);
}

#[test]
fn cleanse_clears_effects_and_flags() {
    let mut state = battle();
    state
        .player
        .status_effects
        .push(StatusEffect::inflict(StatusKind::Weaken, 3, 0, 100, "Dragon"));
    state
        .flags
        .insert(TransientFlags::PLAYER_BURNING | TransientFlags::PLAYER_SLOWED);
    let mut rng = ScriptedRng::default();

    BattleEngine::new(&mut state, &mut rng).use_item("elixir").unwrap();
    assert!(state.player.status_effects.is_empty());
    assert!(!state.flags.intersects(TransientFlags::PLAYER_BURNING | TransientFlags::PLAYER_SLOWED));
    assert_eq!(
        state.log.last(),
        Some("Knight uses Cleansing Elixir and removes all status effects!")
    );
}

#[test]
fn boss_turn_end_clears_one_shot_flags() {
    let mut state = battle();
    state.phase = BattlePhase::BossTurnPending;
    state
        .flags
        .insert(TransientFlags::PLAYER_SLOWED | TransientFlags::PLAYER_DODGING);
    let mut rng = ScriptedRng::default();

    let outcome = BattleEngine::new(&mut state, &mut rng)
        .process_boss_turn()
        .unwrap();
    assert!(matches!(
        outcome.action,
        TurnAction::Attack(ref result) if result.outcome == crate::AttackOutcome::Evaded
    ));
    assert!(state.flags.is_empty());
    let tail = state.log.since(state.log.len() - 2);
    assert_eq!(tail, ["Knight is no longer slowed.", "Knight is no longer dodging."]);
}
