//! Turn state machine.
//!
//! [`BattleEngine`] is the only way turns advance. It guards every action
//! against the current [`BattlePhase`], runs turn-start status processing,
//! resolves the chosen attack or item, and performs end-of-turn bookkeeping.
//! Rewards and persistence belong to the runtime.

mod errors;

pub use errors::ActionError;

use crate::ai::{BossChoice, process_end_of_turn, select_boss_attack};
use crate::combat::{AttackRef, AttackResult, resolve_attack};
use crate::env::RngOracle;
use crate::state::{BattlePhase, BattleState, ItemKind, Outcome, Side, TransientFlags};
use crate::status::{process_status_effects, should_skip_turn};

/// What a turn amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Attack(AttackResult),
    /// An item from the battle inventory was consumed or used.
    Item { item_id: String },
    /// A skip-turn effect or stun forfeited the turn.
    Skipped,
    /// The boss had nothing ready and passed.
    Charged,
    /// Status damage at turn start ended the battle before anyone acted.
    Succumbed,
}

/// Result of one engine step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub action: TurnAction,
    /// Set when this step decided the battle.
    pub resolution: Option<Outcome>,
}

/// Battle engine driving a [`BattleState`] through its turns.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    rng: &'a mut dyn RngOracle,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState, rng: &'a mut dyn RngOracle) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    /// Player uses the attack in `slot` against the boss.
    ///
    /// The slot is validated before anything happens. Then the player's status
    /// effects tick; a skip-turn effect forfeits the turn. A lethal hit resolves
    /// the battle as a victory without ending the turn.
    pub fn use_attack(&mut self, slot: usize) -> Result<TurnOutcome, ActionError> {
        self.ensure_player_turn()?;

        let attacks = &self.state.player.attacks;
        let attack = attacks.get(slot).ok_or(ActionError::UnknownAttackSlot {
            slot,
            available: attacks.len(),
        })?;
        if !attack.is_ready() {
            return Err(ActionError::AttackOnCooldown {
                name: attack.name.clone(),
                remaining: attack.current_cooldown,
            });
        }

        if let Some(early) = self.begin_player_turn() {
            return Ok(early);
        }

        let result = resolve_attack(self.state, Side::Player, AttackRef::Slot(slot), self.rng);
        let resolution = self.settle();
        if resolution.is_none() {
            self.end_player_turn();
        }
        Ok(TurnOutcome {
            action: TurnAction::Attack(result),
            resolution,
        })
    }

    /// Player uses an item from the battle inventory.
    ///
    /// Items bypass attack resolution. One-time items leave the inventory.
    pub fn use_item(&mut self, item_id: &str) -> Result<TurnOutcome, ActionError> {
        self.ensure_player_turn()?;

        let index = self
            .state
            .inventory
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| ActionError::ItemNotInInventory {
                item_id: item_id.to_owned(),
            })?;

        if let Some(early) = self.begin_player_turn() {
            return Ok(early);
        }

        let item = if self.state.inventory[index].one_time_use {
            self.state.inventory.remove(index)
        } else {
            self.state.inventory[index].clone()
        };

        let player = &mut self.state.player;
        let line = match item.kind {
            ItemKind::Health => {
                player.heal(item.value);
                format!("{} uses {} and heals for {} health!", player.name, item.name, item.value)
            }
            ItemKind::Attack => {
                player.attack = player.attack.saturating_add(item.value);
                format!("{} uses {} and gains {} attack!", player.name, item.name, item.value)
            }
            ItemKind::Defense => {
                player.defense = player.defense.saturating_add(item.value);
                format!("{} uses {} and gains {} defense!", player.name, item.name, item.value)
            }
            ItemKind::Cleanse => {
                player.status_effects.clear();
                format!("{} uses {} and removes all status effects!", player.name, item.name)
            }
            ItemKind::Other => format!("{} uses {}!", player.name, item.name),
        };
        if item.kind == ItemKind::Cleanse {
            self.state
                .flags
                .remove(TransientFlags::PLAYER_BURNING | TransientFlags::PLAYER_SLOWED);
        }
        self.state.log.push(line);

        self.end_player_turn();
        Ok(TurnOutcome {
            action: TurnAction::Item { item_id: item.id },
            resolution: None,
        })
    }

    /// Player cooldowns tick down and the boss acts next.
    pub fn end_player_turn(&mut self) {
        self.state.player.tick_cooldowns();
        self.state.phase = BattlePhase::BossTurnPending;
    }

    /// Runs the boss turn: status effects, stun check, attack choice, resolution.
    pub fn process_boss_turn(&mut self) -> Result<TurnOutcome, ActionError> {
        if !self.state.active {
            return Err(ActionError::BattleInactive);
        }
        if !matches!(self.state.phase, BattlePhase::BossTurnPending | BattlePhase::BossTurn) {
            return Err(ActionError::NotBossTurn {
                phase: self.state.phase,
            });
        }
        self.state.phase = BattlePhase::BossTurn;

        process_status_effects(self.state, Side::Boss, self.rng);
        if let Some(resolution) = self.settle() {
            return Ok(TurnOutcome {
                action: TurnAction::Succumbed,
                resolution: Some(resolution),
            });
        }

        if should_skip_turn(self.state, Side::Boss) {
            let name = &self.state.boss.unit.name;
            let line = format!("{name} is stunned and skips a turn!");
            self.state.log.push(line);
            self.state.flags.remove(TransientFlags::BOSS_STUNNED);
            self.end_boss_turn();
            return Ok(TurnOutcome {
                action: TurnAction::Skipped,
                resolution: None,
            });
        }

        let action = match select_boss_attack(self.state, self.rng) {
            BossChoice::Charge => TurnAction::Charged,
            BossChoice::Attack(slot) => {
                TurnAction::Attack(resolve_attack(self.state, Side::Boss, AttackRef::Slot(slot), self.rng))
            }
        };

        let resolution = self.settle();
        if resolution.is_none() {
            self.end_boss_turn();
        }
        Ok(TurnOutcome { action, resolution })
    }

    /// Boss cooldowns tick, one-shot flags clear, and a new round begins.
    pub fn end_boss_turn(&mut self) {
        process_end_of_turn(self.state);

        let boss = self.state.boss.unit.name.clone();
        let player = self.state.player.name.clone();
        let expiring = [
            (TransientFlags::BOSS_STUNNED, format!("{boss} is no longer stunned.")),
            (TransientFlags::PLAYER_SLOWED, format!("{player} is no longer slowed.")),
            (TransientFlags::PLAYER_DODGING, format!("{player} is no longer dodging.")),
        ];
        for (flag, line) in expiring {
            if self.state.flags.contains(flag) {
                self.state.flags.remove(flag);
                self.state.log.push(line);
            }
        }

        self.state.phase = BattlePhase::PlayerTurn;
        self.state.turn_count += 1;
    }

    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if !self.state.active {
            return Err(ActionError::BattleInactive);
        }
        if !self.state.phase.is_player_turn() {
            return Err(ActionError::NotPlayerTurn {
                phase: self.state.phase,
            });
        }
        Ok(())
    }

    /// Turn-start processing for the player. Returns an outcome when the turn
    /// ends before the player gets to act.
    fn begin_player_turn(&mut self) -> Option<TurnOutcome> {
        process_status_effects(self.state, Side::Player, self.rng);
        if let Some(resolution) = self.settle() {
            return Some(TurnOutcome {
                action: TurnAction::Succumbed,
                resolution: Some(resolution),
            });
        }

        if should_skip_turn(self.state, Side::Player) {
            let line = format!("{} is unable to act this turn!", self.state.player.name);
            self.state.log.push(line);
            self.end_player_turn();
            return Some(TurnOutcome {
                action: TurnAction::Skipped,
                resolution: None,
            });
        }
        None
    }

    /// Moves an inactive battle into its resolved phase.
    fn settle(&mut self) -> Option<Outcome> {
        if self.state.active {
            return None;
        }
        if let Some(outcome) = self.state.outcome() {
            return Some(outcome);
        }
        let outcome = if self.state.boss.unit.is_defeated() {
            Outcome::Victory
        } else {
            Outcome::Defeat
        };
        self.state.phase = BattlePhase::Resolved(outcome);
        Some(outcome)
    }
}

#[cfg(test)]
mod tests;
