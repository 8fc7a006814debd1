//! Plain-text rendering of battle and progression state.

use std::fmt::Write;

use battle_core::{Attack, BattleState, Combatant, TemplateOracle};
use battle_runtime::{BattleReport, ProgressionSnapshot};

fn health_bar(unit: &Combatant) -> String {
    const WIDTH: usize = 20;
    let filled = ((unit.health_fraction() * WIDTH as f64).ceil() as usize).min(WIDTH);
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        unit.current_health,
        unit.max_health
    )
}

fn attack_line(slot: usize, attack: &Attack) -> String {
    let readiness = if attack.is_ready() {
        "ready".to_owned()
    } else {
        format!("{} turn(s)", attack.current_cooldown)
    };
    format!(
        "  {}. {} ({} dmg, {}% acc) - {}",
        slot + 1,
        attack.name,
        attack.damage,
        attack.accuracy,
        readiness
    )
}

pub fn battle(state: &BattleState) -> String {
    let mut out = String::new();
    let boss = &state.boss.unit;
    let _ = writeln!(out, "{} (Lv {}) {}", boss.name, boss.level, health_bar(boss));
    if state.boss.current_phase > 0 {
        let _ = writeln!(out, "  phase {}", state.boss.current_phase);
    }
    let player = &state.player;
    let _ = writeln!(out, "{} (Lv {}) {}", player.name, player.level, health_bar(player));
    if state.barrier > 0 {
        let _ = writeln!(out, "  barrier {}", state.barrier);
    }
    for effect in &player.status_effects {
        let _ = writeln!(out, "  {} ({} turn(s))", effect.kind, effect.duration);
    }
    for (slot, attack) in player.attacks.iter().enumerate() {
        let _ = writeln!(out, "{}", attack_line(slot, attack));
    }
    if !state.inventory.is_empty() {
        let bag: Vec<&str> = state.inventory.iter().map(|item| item.id.as_str()).collect();
        let _ = writeln!(out, "  bag: {}", bag.join(", "));
    }
    out
}

pub fn progress(snapshot: &ProgressionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Gold {} | Level {} | Won {} | Lost {}",
        snapshot.gold, snapshot.player_level, snapshot.battles_won, snapshot.battles_lost
    );
    for (id, progress) in &snapshot.characters {
        let _ = writeln!(out, "  {id}: level {} ({} xp)", progress.level, progress.experience);
    }
    if !snapshot.achievements.is_empty() {
        let _ = writeln!(out, "  achievements: {}", snapshot.achievements.join(", "));
    }
    out
}

pub fn heroes(oracle: &dyn TemplateOracle, snapshot: &ProgressionSnapshot) -> String {
    let mut out = String::new();
    for id in oracle.character_ids() {
        let Some(hero) = oracle.character_template(&id) else {
            continue;
        };
        let lock = if snapshot.is_character_unlocked(&id) {
            format!("level {}", snapshot.character_level(&id))
        } else {
            match oracle.character_unlock_cost(&id) {
                Some(cost) => format!("locked, {cost} gold"),
                None => "locked".to_owned(),
            }
        };
        let _ = writeln!(out, "  {id:<10} {:<12} {} ({lock})", hero.name, hero.class);
    }
    out
}

pub fn bosses(oracle: &dyn TemplateOracle, snapshot: &ProgressionSnapshot) -> String {
    let mut out = String::new();
    for id in oracle.boss_ids() {
        let Some(boss) = oracle.boss_template(&id) else {
            continue;
        };
        let status = if snapshot.has_defeated(&id) {
            "defeated".to_owned()
        } else if snapshot.is_enemy_unlocked(&id) {
            "available".to_owned()
        } else {
            match oracle.enemy_unlock_cost(&id) {
                Some(cost) => format!("locked, {cost} gold"),
                None => "locked".to_owned(),
            }
        };
        let _ = writeln!(out, "  {id:<12} Lv {:<3} {} ({status})", boss.level, boss.name);
    }
    out
}

pub fn shop(oracle: &dyn TemplateOracle) -> String {
    let mut out = String::new();
    for item in oracle.shop_items() {
        let _ = writeln!(out, "  {:<22} {:>4} gold  {}", item.id, item.cost, item.description);
    }
    out
}

pub fn report(report: &BattleReport) -> String {
    let mut out = format!("Battle over after {} turn(s): {}\n", report.turns, report.outcome());
    if let Some(error) = &report.save_error {
        let _ = writeln!(out, "Warning: progress could not be saved ({error})");
    }
    out
}
