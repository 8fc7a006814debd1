//! Turn-based boss battle rules.
//!
//! `battle-core` defines the canonical combat rules (attack resolution, status
//! effects, boss decisions, turn sequencing) as pure functions over
//! [`state::BattleState`]. It performs no I/O: templates arrive through
//! [`env::TemplateOracle`], randomness through [`env::RngOracle`], and every
//! observable event is appended to the battle log.
//!
//! All turn transitions flow through [`engine::BattleEngine`]; the runtime
//! crate wraps it with persistence and pacing.
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;
pub mod status;

pub use ai::{BossChoice, select_boss_attack};
pub use combat::{AttackOutcome, AttackRef, AttackResult, resolve_attack};
pub use config::BattleConfig;
pub use engine::{ActionError, BattleEngine, TurnAction, TurnOutcome};
pub use env::{
    BossTemplate, CharacterClass, CharacterTemplate, PcgRng, RngOracle, ScriptedRng,
    TemplateOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Attack, AttackType, BattleLog, BattlePhase, BattleState, Boss, ClassTrait, Combatant,
    EffectSpec, EnemyTier, Item, ItemKind, LegacyFlag, Outcome, Phase, Side, Stat, StatModifier,
    StatusEffect, StatusKind, TransientFlags,
};
