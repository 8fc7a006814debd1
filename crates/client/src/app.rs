//! Glue code tying the battle driver to stdin and stdout.

use anyhow::Result;
use battle_runtime::{BattleDriver, DriverEvent, RuntimeError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::input::{Command, HELP};
use crate::presentation;

pub struct CliApp {
    driver: BattleDriver,
    events: broadcast::Receiver<DriverEvent>,
    /// Battle log lines already shown.
    printed: usize,
}

impl CliApp {
    pub fn new(driver: BattleDriver) -> Self {
        let events = driver.subscribe();
        Self {
            driver,
            events,
            printed: 0,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        println!("Boss Battle. Type 'help' for commands.");
        {
            let session = self.driver.session().await;
            print!("{}", presentation::progress(session.progress()));
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match line.parse::<Command>() {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.handle(command).await,
                        Err(e) => println!("{e}"),
                    }
                }
                event = self.events.recv() => self.on_event(event).await,
            }
        }

        self.driver.reset().await;
        println!("Farewell!");
        Ok(())
    }

    async fn handle(&mut self, command: Command) {
        if let Err(e) = self.execute(command).await {
            match e.downcast_ref::<RuntimeError>() {
                Some(RuntimeError::Action(action)) => println!("{action}"),
                Some(runtime) => println!("{runtime}"),
                None => println!("error: {e:#}"),
            }
        }
    }

    async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::None => {}
            Command::Help => println!("{HELP}"),
            Command::ListHeroes => {
                let session = self.driver.session().await;
                print!("{}", presentation::heroes(session.oracle(), session.progress()));
            }
            Command::ListBosses => {
                let session = self.driver.session().await;
                print!("{}", presentation::bosses(session.oracle(), session.progress()));
            }
            Command::Shop => {
                let session = self.driver.session().await;
                print!("{}", presentation::shop(session.oracle()));
            }
            Command::Status => {
                let session = self.driver.session().await;
                match session.battle() {
                    Some(state) => print!("{}", presentation::battle(state)),
                    None => print!("{}", presentation::progress(session.progress())),
                }
            }
            Command::Fight { hero, boss } => {
                self.printed = 0;
                self.driver.start_battle(&hero, &boss).await?;
                self.flush_log().await;
                let session = self.driver.session().await;
                if let Some(state) = session.battle() {
                    print!("{}", presentation::battle(state));
                }
            }
            Command::Attack(slot) => {
                let outcome = self.driver.use_attack(slot).await?;
                self.after_player_action(outcome.resolution.is_some()).await?;
            }
            Command::UseItem(id) => {
                let outcome = self.driver.use_item(&id).await?;
                self.after_player_action(outcome.resolution.is_some()).await?;
            }
            Command::Buy(id) => {
                let mut session = self.driver.session().await;
                let item = session.buy_item(&id)?.name.clone();
                println!("Bought {item}. {} gold left.", session.progress().gold);
            }
            Command::UnlockHero(id) => {
                let gold = self.driver.session().await.unlock_character(&id)?;
                println!("{id} joins your roster. {gold} gold left.");
            }
            Command::UnlockBoss(id) => {
                let gold = self.driver.session().await.unlock_enemy(&id)?;
                println!("{id} awaits your challenge. {gold} gold left.");
            }
            Command::Flee => {
                self.driver.reset().await;
                println!("You flee the battle.");
            }
            Command::ResetProgress => {
                self.driver.reset().await;
                self.driver.session().await.reset_progress()?;
                println!("Progress has been reset.");
            }
            Command::Quit => {}
        }
        Ok(())
    }

    async fn after_player_action(&mut self, resolved: bool) -> Result<()> {
        self.flush_log().await;
        if resolved {
            self.finish_battle().await?;
        } else if self.driver.has_pending_turn() {
            println!("...");
        }
        Ok(())
    }

    async fn on_event(&mut self, event: Result<DriverEvent, broadcast::error::RecvError>) {
        match event {
            Ok(DriverEvent::BossTurnCompleted(_)) => {
                self.flush_log().await;
                let session = self.driver.session().await;
                if let Some(state) = session.battle().filter(|state| state.active) {
                    print!("{}", presentation::battle(state));
                }
            }
            Ok(DriverEvent::BattleResolved(outcome)) => {
                debug!(%outcome, "Boss turn decided the battle");
                if let Err(e) = self.finish_battle().await {
                    println!("{e}");
                }
            }
            Ok(DriverEvent::BossTurnSkipped { reason }) => debug!(reason, "Boss turn skipped"),
            Ok(DriverEvent::BossTurnScheduled { .. }) => {}
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "Missed driver events");
                self.flush_log().await;
            }
            Err(broadcast::error::RecvError::Closed) => {}
        }
    }

    async fn finish_battle(&mut self) -> Result<()> {
        let report = self.driver.end_battle().await?;
        for line in report.log.iter().skip(self.printed) {
            println!("{line}");
        }
        self.printed = 0;
        print!("{}", presentation::report(&report));
        Ok(())
    }

    async fn flush_log(&mut self) {
        let session = self.driver.session().await;
        let Some(state) = session.battle() else {
            return;
        };
        for line in state.log.since(self.printed) {
            println!("{line}");
        }
        self.printed = state.log.len();
    }
}
