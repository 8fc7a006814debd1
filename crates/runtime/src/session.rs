//! Battle lifecycle and meta-progression commands.
//!
//! [`BattleSession`] is the runtime's single owner of mutable game data: the
//! saved [`ProgressionSnapshot`] and, while a fight is on, the active
//! [`BattleState`]. Every turn goes through [`BattleEngine`]; this layer adds
//! template lookup, reward settlement, and persistence.

use std::sync::Arc;

use battle_core::{
    BattleConfig, BattleEngine, BattleState, CharacterClass, GameError, Item, Outcome, RngOracle,
    TemplateOracle, TurnOutcome,
};
use tracing::{debug, error, info, warn};

use crate::api::{Result, RuntimeError, UnlockKind};
use crate::progression::{BattleHero, ExperienceService, RewardSummary, settle_rewards};
use crate::repository::{ProgressionRepository, ProgressionSnapshot};

/// Final word on a finished battle.
#[derive(Clone, Debug)]
pub struct BattleReport {
    pub hero_id: String,
    pub boss_id: String,
    pub rewards: RewardSummary,
    pub turns: u32,
    /// Complete battle log, reward lines included.
    pub log: Vec<String>,
    /// Set when the snapshot could not be saved. The rewards still apply for
    /// this session.
    pub save_error: Option<String>,
}

impl BattleReport {
    pub fn outcome(&self) -> Outcome {
        self.rewards.outcome
    }
}

struct ActiveBattle {
    state: BattleState,
    hero_id: String,
    boss_id: String,
    class: CharacterClass,
}

/// A player's game: progression plus at most one battle in progress.
pub struct BattleSession {
    oracle: Arc<dyn TemplateOracle>,
    repository: Arc<dyn ProgressionRepository>,
    rules: BattleConfig,
    experience: ExperienceService,
    rng: Box<dyn RngOracle + Send>,
    progress: ProgressionSnapshot,
    battle: Option<ActiveBattle>,
}

impl BattleSession {
    /// Opens a session, loading saved progression.
    ///
    /// A missing or unreadable save starts from the default snapshot.
    pub fn new(
        oracle: Arc<dyn TemplateOracle>,
        repository: Arc<dyn ProgressionRepository>,
        rules: BattleConfig,
        rng: Box<dyn RngOracle + Send>,
    ) -> Self {
        let progress = match repository.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                debug!("No saved progression; starting fresh");
                ProgressionSnapshot::default()
            }
            Err(e) => {
                warn!("Failed to load progression: {}. Starting fresh.", e);
                ProgressionSnapshot::default()
            }
        };

        Self {
            oracle,
            repository,
            experience: ExperienceService::from_rules(&rules),
            rules,
            rng,
            progress,
            battle: None,
        }
    }

    pub fn progress(&self) -> &ProgressionSnapshot {
        &self.progress
    }

    pub fn oracle(&self) -> &dyn TemplateOracle {
        self.oracle.as_ref()
    }

    /// The battle in progress, if any.
    pub fn battle(&self) -> Option<&BattleState> {
        self.battle.as_ref().map(|battle| &battle.state)
    }

    /// Whether a battle exists and is still being fought.
    pub fn is_active(&self) -> bool {
        self.battle().is_some_and(|state| state.active)
    }

    /// Starts a battle between a hero and a boss.
    ///
    /// Both must exist and be unlocked. The hero fights at its saved level and
    /// brings the owned inventory. A battle already in progress is abandoned.
    pub fn start_battle(&mut self, hero_id: &str, boss_id: &str) -> Result<&BattleState> {
        let hero = self
            .oracle
            .character_template(hero_id)
            .ok_or_else(|| RuntimeError::UnknownHero(hero_id.to_owned()))?;
        let boss = self
            .oracle
            .boss_template(boss_id)
            .ok_or_else(|| RuntimeError::UnknownBoss(boss_id.to_owned()))?;

        if !self.progress.is_character_unlocked(hero_id) {
            return Err(RuntimeError::Locked {
                kind: UnlockKind::Hero,
                id: hero_id.to_owned(),
            });
        }
        if !self.progress.is_enemy_unlocked(boss_id) {
            return Err(RuntimeError::Locked {
                kind: UnlockKind::Boss,
                id: boss_id.to_owned(),
            });
        }

        if self.is_active() {
            info!("Abandoning the current battle for a new one");
        }

        let level = self.progress.character_level(hero_id);
        let state = BattleState::new(
            hero.instantiate(level),
            boss.instantiate(),
            self.progress.inventory.clone(),
            self.rules.clone(),
        );

        info!(
            hero = hero_id,
            boss = boss_id,
            level,
            player_first = state.is_player_turn(),
            "Battle started"
        );

        let battle = self.battle.insert(ActiveBattle {
            state,
            hero_id: hero.id,
            boss_id: boss.id,
            class: hero.class,
        });
        Ok(&battle.state)
    }

    /// Player attacks with the attack in `slot`.
    pub fn use_attack(&mut self, slot: usize) -> Result<TurnOutcome> {
        let outcome = self.engine()?.use_attack(slot);
        self.finish_action("use_attack", outcome)
    }

    /// Player uses an item from the battle inventory.
    pub fn use_item(&mut self, item_id: &str) -> Result<TurnOutcome> {
        let outcome = self.engine()?.use_item(item_id);
        self.finish_action("use_item", outcome)
    }

    /// Boss takes its turn.
    pub fn process_boss_turn(&mut self) -> Result<TurnOutcome> {
        let outcome = self.engine()?.process_boss_turn();
        self.finish_action("process_boss_turn", outcome)
    }

    /// Settles a decided battle: rewards, unlocks, experience, then a save.
    ///
    /// The battle stays inspectable until the next start or [`reset`](Self::reset).
    pub fn end_battle(&mut self) -> Result<BattleReport> {
        let battle = self.battle.as_mut().ok_or(RuntimeError::NoActiveBattle)?;
        let outcome = battle.state.outcome().ok_or(RuntimeError::BattleNotResolved)?;

        let rewards = settle_rewards(
            &mut self.progress,
            &mut battle.state,
            outcome,
            BattleHero {
                id: &battle.hero_id,
                class: battle.class,
            },
            &self.rules,
            &self.experience,
            self.oracle.as_ref(),
        );
        self.progress.inventory = battle.state.inventory.clone();

        let report = BattleReport {
            hero_id: battle.hero_id.clone(),
            boss_id: battle.boss_id.clone(),
            rewards,
            turns: battle.state.turn_count,
            log: battle.state.log.lines().to_vec(),
            save_error: None,
        };
        self.battle = None;

        info!(
            outcome = %report.outcome(),
            gold = report.rewards.gold,
            xp = report.rewards.xp.xp_gained,
            turns = report.turns,
            "Battle ended"
        );

        let save_error = self.persist().err().map(|e| e.to_string());
        Ok(BattleReport { save_error, ..report })
    }

    /// Drops the battle in progress without rewards.
    pub fn reset(&mut self) {
        if self.battle.take().is_some() {
            info!("Battle abandoned");
        }
    }

    /// Buys a hero with gold.
    pub fn unlock_character(&mut self, id: &str) -> Result<u32> {
        if self.oracle.character_template(id).is_none() {
            return Err(RuntimeError::UnknownHero(id.to_owned()));
        }
        if self.progress.is_character_unlocked(id) {
            return Err(RuntimeError::AlreadyUnlocked {
                kind: UnlockKind::Hero,
                id: id.to_owned(),
            });
        }
        let cost = self
            .oracle
            .character_unlock_cost(id)
            .ok_or_else(|| RuntimeError::NotForSale {
                kind: UnlockKind::Hero,
                id: id.to_owned(),
            })?;

        let previous = self.progress.clone();
        self.charge(cost)?;
        self.progress.unlock_character(id);
        info!(hero = id, cost, "Hero unlocked");
        self.commit(previous)?;
        Ok(self.progress.gold)
    }

    /// Buys early access to a boss with gold.
    pub fn unlock_enemy(&mut self, id: &str) -> Result<u32> {
        if self.oracle.boss_template(id).is_none() {
            return Err(RuntimeError::UnknownBoss(id.to_owned()));
        }
        if self.progress.is_enemy_unlocked(id) {
            return Err(RuntimeError::AlreadyUnlocked {
                kind: UnlockKind::Boss,
                id: id.to_owned(),
            });
        }
        let cost = self
            .oracle
            .enemy_unlock_cost(id)
            .ok_or_else(|| RuntimeError::NotForSale {
                kind: UnlockKind::Boss,
                id: id.to_owned(),
            })?;

        let previous = self.progress.clone();
        self.charge(cost)?;
        self.progress.unlock_enemy(id);
        info!(boss = id, cost, "Boss unlocked");
        self.commit(previous)?;
        Ok(self.progress.gold)
    }

    /// Buys an item from the shop into the owned inventory.
    pub fn buy_item(&mut self, id: &str) -> Result<&Item> {
        let item = self
            .oracle
            .item(id)
            .ok_or_else(|| RuntimeError::UnknownItem(id.to_owned()))?;

        let previous = self.progress.clone();
        self.charge(item.cost)?;
        info!(item = id, cost = item.cost, "Item bought");
        self.progress.inventory.push(item);
        self.commit(previous)?;

        self.progress
            .inventory
            .last()
            .ok_or_else(|| RuntimeError::UnknownItem(id.to_owned()))
    }

    /// Wipes progression back to a fresh start and saves it.
    pub fn reset_progress(&mut self) -> Result<()> {
        self.battle = None;
        let previous = std::mem::take(&mut self.progress);
        info!("Progress has been reset");
        self.commit(previous)
    }

    fn engine(&mut self) -> Result<BattleEngine<'_>> {
        let battle = self.battle.as_mut().ok_or(RuntimeError::NoActiveBattle)?;
        Ok(BattleEngine::new(&mut battle.state, self.rng.as_mut()))
    }

    fn finish_action(
        &self,
        action: &str,
        outcome: std::result::Result<TurnOutcome, battle_core::ActionError>,
    ) -> Result<TurnOutcome> {
        match outcome {
            Ok(outcome) => {
                debug!(action, ?outcome.action, "Turn step resolved");
                if let Some(resolution) = outcome.resolution {
                    info!(%resolution, "Battle decided");
                }
                Ok(outcome)
            }
            Err(e) => {
                warn!(action, code = e.error_code(), "Action ignored: {}", e);
                Err(e.into())
            }
        }
    }

    fn charge(&mut self, cost: u32) -> Result<()> {
        if self.progress.spend_gold(cost) {
            Ok(())
        } else {
            Err(RuntimeError::InsufficientGold {
                needed: cost,
                available: self.progress.gold,
            })
        }
    }

    /// Saves a purchase or reset. A failed save puts `previous` back so memory
    /// never runs ahead of the save file.
    fn commit(&mut self, previous: ProgressionSnapshot) -> Result<()> {
        let saved = self.persist();
        if saved.is_err() {
            warn!("Rolling back unsaved progression change");
            self.progress = previous;
        }
        saved
    }

    fn persist(&mut self) -> Result<()> {
        self.progress.saved_at = Some(chrono::Utc::now());
        self.repository.save(&self.progress).map_err(|e| {
            error!("Failed to save progression: {}", e);
            RuntimeError::from(e)
        })
    }
}
