//! Runtime orchestration for boss battles.
//!
//! This crate wraps the pure rules in `battle-core` with everything a playable
//! game needs around them: template lookup, saved progression, rewards, and
//! boss-turn pacing. Consumers embed [`BattleSession`] for synchronous play or
//! [`BattleDriver`] to have boss turns scheduled on the tokio runtime.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the battle lifecycle and meta-progression commands
//! - [`driver`] schedules delayed boss turns
//! - [`api`] exposes the error types downstream clients interact with
//! - [`progression`] applies experience and rewards to the saved snapshot
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod config;
pub mod driver;
pub mod oracle;
pub mod progression;
pub mod repository;
pub mod rng;
pub mod session;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use driver::{BattleDriver, DriverEvent};
pub use oracle::CatalogOracle;
pub use progression::{ExperienceService, RewardSummary, XpAward};
pub use repository::{
    CharacterProgress, FileProgressionRepository, InMemoryProgressionRepository,
    ProgressionRepository, ProgressionSnapshot, RepositoryError,
};
pub use rng::EntropyRng;
pub use session::{BattleReport, BattleSession};
