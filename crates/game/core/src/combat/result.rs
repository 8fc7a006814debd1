//! Attack resolution entry point and its result types.

use super::damage::{multi_hit_strike_damage, single_hit_damage};
use super::effects::{apply_attacker_effects, apply_status_effect};
use super::hit::check_hit;
use crate::env::RngOracle;
use crate::state::{Attack, BattleState, Side, TransientFlags};

/// Which attack to resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttackRef {
    /// Index into the attacker's attack list. Cooldown bookkeeping applies.
    Slot(usize),
    /// An attack that is not part of the attacker's list.
    Improvised(Attack),
}

/// What happened when the attack was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The battle was already over; nothing was resolved.
    Ignored,
    Missed,
    /// The player dodged the blow.
    Evaded,
    Hit {
        /// Health actually removed from the target.
        damage: u32,
        /// Damage soaked up by the player's barrier.
        absorbed: u32,
        critical: bool,
    },
    MultiHit {
        hits: u32,
        strikes: u32,
        damage: u32,
        absorbed: u32,
    },
}

/// Result of one [`resolve_attack`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub attacker: Side,
    pub attack_name: String,
    pub outcome: AttackOutcome,
    /// The target dropped to 0 health during this attack.
    pub target_defeated: bool,
}

impl AttackResult {
    pub fn hit(&self) -> bool {
        match self.outcome {
            AttackOutcome::Hit { .. } => true,
            AttackOutcome::MultiHit { hits, .. } => hits > 0,
            AttackOutcome::Ignored | AttackOutcome::Missed | AttackOutcome::Evaded => false,
        }
    }

    /// Health removed from the target.
    pub fn damage(&self) -> u32 {
        match self.outcome {
            AttackOutcome::Hit { damage, .. } | AttackOutcome::MultiHit { damage, .. } => damage,
            _ => 0,
        }
    }

    pub fn critical(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Hit { critical: true, .. })
    }
}

/// Resolves one attack from `attacker` against its opponent.
///
/// The caller is responsible for choosing a ready attack. An out-of-range slot
/// falls back to [`Attack::basic_strike`] with a log line. The attack goes on
/// cooldown whether it hits or not.
pub fn resolve_attack(
    state: &mut BattleState,
    attacker: Side,
    attack: AttackRef,
    rng: &mut dyn RngOracle,
) -> AttackResult {
    if !state.active {
        let attack_name = match &attack {
            AttackRef::Slot(index) => state
                .combatant(attacker)
                .attacks
                .get(*index)
                .map_or_else(|| Attack::basic_strike().name, |found| found.name.clone()),
            AttackRef::Improvised(attack) => attack.name.clone(),
        };
        return AttackResult {
            attacker,
            attack_name,
            outcome: AttackOutcome::Ignored,
            target_defeated: false,
        };
    }

    let (attack, slot) = match attack {
        AttackRef::Slot(index) => match state.combatant(attacker).attacks.get(index) {
            Some(found) => (found.clone(), Some(index)),
            None => {
                let line = format!(
                    "{} fumbles and falls back to Basic Strike!",
                    state.combatant(attacker).name
                );
                state.log.push(line);
                (Attack::basic_strike(), None)
            }
        },
        AttackRef::Improvised(attack) => (attack, None),
    };

    let mut result = AttackResult {
        attacker,
        attack_name: attack.name.clone(),
        outcome: AttackOutcome::Ignored,
        target_defeated: false,
    };

    let target = attacker.opponent();
    let attacker_name = state.combatant(attacker).name.clone();
    let target_name = state.combatant(target).name.clone();

    if !check_hit(attack.accuracy, rng.roll_percent()) {
        state
            .log
            .push(format!("{attacker_name}'s {} missed!", attack.name));
        start_cooldown(state, attacker, slot);
        result.outcome = AttackOutcome::Missed;
        return result;
    }

    if target == Side::Player && state.flags.contains(TransientFlags::PLAYER_DODGING) {
        state.log.push(format!(
            "{target_name} dodges {attacker_name}'s {}!",
            attack.name
        ));
        start_cooldown(state, attacker, slot);
        result.outcome = AttackOutcome::Evaded;
        return result;
    }

    if let Some(strikes) = attack.multi_hit() {
        result.outcome = resolve_multi_hit(state, attacker, &attack, strikes, rng);
        start_cooldown(state, attacker, slot);
        result.target_defeated = state.check_defeat(target);
        return result;
    }

    let critical = rng.chance(state.rules.crit_chance(attack.has_crit_focus()));
    let raw = single_hit_damage(
        attack.damage,
        state.combatant(attacker).attack,
        state.combatant(target).effective_defense(),
        critical,
        &state.rules,
    );
    let absorbed = absorb(state, target, raw);
    let dealt = state.combatant_mut(target).take_damage(raw - absorbed);

    let mut line = format!(
        "{attacker_name} used {} and dealt {dealt} damage to {target_name}!",
        attack.name
    );
    if critical {
        line.push_str(" CRITICAL HIT!");
    }
    state.log.push(line);
    result.outcome = AttackOutcome::Hit {
        damage: dealt,
        absorbed,
        critical,
    };

    apply_status_effect(state, attacker, &attack, rng);
    apply_attacker_effects(state, attacker, &attack);
    start_cooldown(state, attacker, slot);
    result.target_defeated = state.check_defeat(target);
    result
}

fn resolve_multi_hit(
    state: &mut BattleState,
    attacker: Side,
    attack: &Attack,
    strikes: u32,
    rng: &mut dyn RngOracle,
) -> AttackOutcome {
    let target = attacker.opponent();
    let per_hit = multi_hit_strike_damage(
        attack.damage,
        state.combatant(attacker).attack,
        state.combatant(target).effective_defense(),
        &state.rules,
    );

    let hits = (0..strikes)
        .filter(|_| rng.chance(state.rules.multi_hit_chance))
        .count() as u32;
    let attacker_name = state.combatant(attacker).name.clone();

    if hits == 0 {
        state.log.push(format!(
            "{attacker_name} used {} but missed all {strikes} hits!",
            attack.name
        ));
        return AttackOutcome::MultiHit {
            hits,
            strikes,
            damage: 0,
            absorbed: 0,
        };
    }

    let total = per_hit.saturating_mul(hits);
    let absorbed = absorb(state, target, total);
    let damage = state.combatant_mut(target).take_damage(total - absorbed);
    state.log.push(format!(
        "{attacker_name} used {} and hit {hits}/{strikes} times for {damage} total damage!",
        attack.name
    ));
    AttackOutcome::MultiHit {
        hits,
        strikes,
        damage,
        absorbed,
    }
}

/// Soaks incoming damage against the player into the barrier. Returns the absorbed part.
fn absorb(state: &mut BattleState, target: Side, incoming: u32) -> u32 {
    if target != Side::Player || state.barrier == 0 || incoming == 0 {
        return 0;
    }
    let absorbed = incoming.min(state.barrier);
    state.barrier -= absorbed;
    state.log.push(format!(
        "{}'s barrier absorbs {absorbed} damage!",
        state.player.name
    ));
    absorbed
}

fn start_cooldown(state: &mut BattleState, attacker: Side, slot: Option<usize>) {
    if let Some(attack) = slot.and_then(|index| state.combatant_mut(attacker).attacks.get_mut(index)) {
        attack.start_cooldown();
    }
}
