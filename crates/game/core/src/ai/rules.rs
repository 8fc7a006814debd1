//! Priority rules for boss attack selection.
//!
//! 1. Below 30% health: a ready self-heal.
//! 2. Every third round: a ready special (cooldown 3+), else maybe regenerate.
//! 3. Player above 60% health: a random ready heavy hitter (damage over 20).
//! 4. Player neither burning nor slowed: the first ready status attack.
//! 5. Any ready attack at random.

use behavior_tree::{Node, Status, builder::*};

use super::AiContext;
use crate::state::TransientFlags;

const DESPERATE_HEALTH: f64 = 0.3;
const SPECIAL_TURN_INTERVAL: u32 = 3;
const SPECIAL_MIN_COOLDOWN: u32 = 3;
const HEALTHY_PLAYER: f64 = 0.6;
const HEAVY_DAMAGE: u32 = 20;

pub(super) fn boss_rules<'a>() -> Node<'a, AiContext<'a>> {
    selector(vec![
        sequence(vec![condition(boss_is_desperate), action(pick_self_heal)]),
        sequence(vec![condition(is_special_turn), action(pick_special_or_regenerate)]),
        sequence(vec![condition(player_is_healthy), action(pick_heavy_hitter)]),
        sequence(vec![condition(player_is_unaffected), action(pick_status_attack)]),
        action(pick_any),
    ])
}

fn boss_is_desperate(ctx: &AiContext<'_>) -> bool {
    ctx.state.boss.unit.health_fraction() < DESPERATE_HEALTH
}

fn is_special_turn(ctx: &AiContext<'_>) -> bool {
    ctx.state.turn_count % SPECIAL_TURN_INTERVAL == 0
}

fn player_is_healthy(ctx: &AiContext<'_>) -> bool {
    ctx.state.player.health_fraction() > HEALTHY_PLAYER
}

fn player_is_unaffected(ctx: &AiContext<'_>) -> bool {
    !ctx.state
        .flags
        .intersects(TransientFlags::PLAYER_BURNING | TransientFlags::PLAYER_SLOWED)
}

fn pick_self_heal(ctx: &mut AiContext<'_>) -> Status {
    Status::from_bool(ctx.choose_first(|attack| attack.self_heal().is_some()))
}

/// Fails after regenerating so the remaining rules still choose an attack.
fn pick_special_or_regenerate(ctx: &mut AiContext<'_>) -> Status {
    if ctx.choose_first(|attack| attack.cooldown >= SPECIAL_MIN_COOLDOWN) {
        return Status::Success;
    }
    if ctx.rng.chance(ctx.state.rules.boss_regen_chance) {
        let boss = &mut ctx.state.boss.unit;
        let amount = (f64::from(boss.max_health) * ctx.state.rules.boss_regen_fraction).floor() as u32;
        boss.heal(amount);
        let line = format!("{} recovers {amount} health!", boss.name);
        ctx.state.log.push(line);
    }
    Status::Failure
}

fn pick_heavy_hitter(ctx: &mut AiContext<'_>) -> Status {
    Status::from_bool(ctx.choose_random(|attack| attack.damage > HEAVY_DAMAGE))
}

fn pick_status_attack(ctx: &mut AiContext<'_>) -> Status {
    Status::from_bool(ctx.choose_first(|attack| attack.applies_status()))
}

fn pick_any(ctx: &mut AiContext<'_>) -> Status {
    Status::from_bool(ctx.choose_random(|_| true))
}
