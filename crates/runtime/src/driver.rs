//! Paced boss turns on the tokio runtime.
//!
//! [`BattleDriver`] owns a [`BattleSession`] behind an async mutex. Whenever a
//! player action hands the turn to the boss, the driver spawns a task that
//! waits `boss_turn_delay` and then runs the boss turn. The task re-checks the
//! battle before acting, and `reset`, `start_battle` and `end_battle` abort
//! it, so a stale boss turn never lands on a different battle.

use std::sync::Arc;
use std::time::Duration;

use battle_core::{BattlePhase, Outcome, TurnOutcome};
use tokio::sync::{Mutex, MutexGuard, broadcast};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::Result;
use crate::session::{BattleReport, BattleSession};

const EVENT_BUFFER: usize = 64;

/// Notifications published by the driver's background boss turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverEvent {
    /// A boss turn will run after the configured delay.
    BossTurnScheduled { delay: Duration },
    /// The boss acted; the player may move unless the battle ended.
    BossTurnCompleted(TurnOutcome),
    /// The boss turn was refused or the battle was gone.
    BossTurnSkipped { reason: String },
    /// A background boss turn decided the battle.
    BattleResolved(Outcome),
}

pub struct BattleDriver {
    session: Arc<Mutex<BattleSession>>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    events: broadcast::Sender<DriverEvent>,
}

impl BattleDriver {
    pub fn new(session: BattleSession, delay: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            session: Arc::new(Mutex::new(session)),
            delay,
            pending: None,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DriverEvent> {
        self.events.subscribe()
    }

    /// Locks the session for reads or commands that need no pacing.
    pub async fn session(&self) -> MutexGuard<'_, BattleSession> {
        self.session.lock().await
    }

    /// Whether a boss turn is scheduled and has not finished yet.
    pub fn has_pending_turn(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Starts a battle. A faster boss gets its opening turn scheduled.
    pub async fn start_battle(&mut self, hero_id: &str, boss_id: &str) -> Result<()> {
        self.cancel_pending();
        let boss_first = {
            let mut session = self.session.lock().await;
            let state = session.start_battle(hero_id, boss_id)?;
            state.phase == BattlePhase::BossTurnPending
        };
        if boss_first {
            self.schedule_boss_turn();
        }
        Ok(())
    }

    pub async fn use_attack(&mut self, slot: usize) -> Result<TurnOutcome> {
        let (outcome, boss_next) = {
            let mut session = self.session.lock().await;
            let outcome = session.use_attack(slot)?;
            (outcome, boss_turn_pending(&session))
        };
        if boss_next {
            self.schedule_boss_turn();
        }
        Ok(outcome)
    }

    pub async fn use_item(&mut self, item_id: &str) -> Result<TurnOutcome> {
        let (outcome, boss_next) = {
            let mut session = self.session.lock().await;
            let outcome = session.use_item(item_id)?;
            (outcome, boss_turn_pending(&session))
        };
        if boss_next {
            self.schedule_boss_turn();
        }
        Ok(outcome)
    }

    pub async fn end_battle(&mut self) -> Result<BattleReport> {
        self.cancel_pending();
        self.session.lock().await.end_battle()
    }

    /// Abandons the battle and drops any scheduled boss turn.
    pub async fn reset(&mut self) {
        self.cancel_pending();
        self.session.lock().await.reset();
    }

    /// Waits for the scheduled boss turn, if any, to finish.
    pub async fn settle(&mut self) {
        if let Some(task) = self.pending.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    warn!("Boss turn task failed: {}", e);
                }
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            if !task.is_finished() {
                debug!("Cancelling scheduled boss turn");
            }
            task.abort();
        }
    }

    fn schedule_boss_turn(&mut self) {
        self.cancel_pending();

        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        let delay = self.delay;
        let _ = events.send(DriverEvent::BossTurnScheduled { delay });

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut session = session.lock().await;
            if !boss_turn_pending(&session) {
                let _ = events.send(DriverEvent::BossTurnSkipped {
                    reason: "battle is no longer waiting on the boss".into(),
                });
                return;
            }

            match session.process_boss_turn() {
                Ok(outcome) => {
                    let resolution = outcome.resolution;
                    let _ = events.send(DriverEvent::BossTurnCompleted(outcome));
                    if let Some(resolution) = resolution {
                        let _ = events.send(DriverEvent::BattleResolved(resolution));
                    }
                }
                Err(e) => {
                    let _ = events.send(DriverEvent::BossTurnSkipped {
                        reason: e.to_string(),
                    });
                }
            }
        }));
    }
}

impl Drop for BattleDriver {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn boss_turn_pending(session: &BattleSession) -> bool {
    session
        .battle()
        .is_some_and(|state| state.active && state.phase == BattlePhase::BossTurnPending)
}
