//! Battle data model.
//!
//! [`BattleState`] is the aggregate root: it owns both combatants, the battle
//! log, transient modifiers and the current turn phase. Everything else in
//! this crate operates on it by mutable reference.
mod attack;
mod battle;
mod combatant;
mod item;
mod status_effect;

pub use attack::{Attack, AttackType, EffectSpec, LegacyFlag};
pub use battle::{BattleLog, BattlePhase, BattleState, Outcome, Side, TransientFlags};
pub use combatant::{Boss, ClassTrait, Combatant, EnemyTier, Phase};
pub use item::{Item, ItemKind};
pub use status_effect::{Stat, StatModifier, StatusEffect, StatusKind};
