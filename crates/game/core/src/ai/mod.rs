//! Boss decision making.
//!
//! Each boss turn runs the phase check, makes sure the boss has something to
//! swing, then evaluates a priority list of rules expressed as a behavior-tree
//! selector: the first rule that picks an attack wins.

mod phase;
mod rules;

use behavior_tree::Behavior;

pub use phase::{check_phase_transition, process_end_of_turn, transition_to_phase};

use crate::env::RngOracle;
use crate::state::{Attack, BattleState};

/// What the boss does this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossChoice {
    /// Use the attack in this slot of the boss's attack list.
    Attack(usize),
    /// Every attack is cooling down; the turn passes without an attack.
    Charge,
}

/// Blackboard the boss rules read and write.
pub struct AiContext<'a> {
    pub state: &'a mut BattleState,
    pub rng: &'a mut dyn RngOracle,
    pub choice: Option<BossChoice>,
}

impl AiContext<'_> {
    /// Ready boss attacks matching `filter`, in list order.
    pub fn ready_slots(&self, filter: impl Fn(&Attack) -> bool) -> Vec<usize> {
        self.state
            .boss
            .unit
            .ready_attacks()
            .filter(|(_, attack)| filter(*attack))
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Records the first match as the choice.
    pub fn choose_first(&mut self, filter: impl Fn(&Attack) -> bool) -> bool {
        match self.ready_slots(filter).first() {
            Some(&slot) => {
                self.choice = Some(BossChoice::Attack(slot));
                true
            }
            None => false,
        }
    }

    /// Records a uniformly random match as the choice.
    pub fn choose_random(&mut self, filter: impl Fn(&Attack) -> bool) -> bool {
        let slots = self.ready_slots(filter);
        if slots.is_empty() {
            return false;
        }
        let slot = slots[self.rng.pick(slots.len())];
        self.choice = Some(BossChoice::Attack(slot));
        true
    }
}

/// Chooses the boss's action for this turn.
///
/// Runs [`check_phase_transition`] first. A boss without attacks is handed a
/// Basic Strike; a boss whose attacks are all cooling down charges instead.
pub fn select_boss_attack(state: &mut BattleState, rng: &mut dyn RngOracle) -> BossChoice {
    check_phase_transition(state);

    let name = state.boss.unit.name.clone();
    if state.boss.unit.attacks.is_empty() {
        state
            .log
            .push(format!("{name} has no attacks and falls back to Basic Strike!"));
        state.boss.unit.attacks.push(Attack::basic_strike());
    }

    let first_ready = state.boss.unit.ready_attacks().map(|(slot, _)| slot).next();
    let Some(first_ready) = first_ready else {
        state
            .log
            .push(format!("{name} is charging up for next attack!"));
        return BossChoice::Charge;
    };

    let mut ctx = AiContext {
        state,
        rng,
        choice: None,
    };
    rules::boss_rules().tick(&mut ctx);
    ctx.choice.unwrap_or(BossChoice::Attack(first_ready))
}
