//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the battle engine, repositories, and catalog lookups so
//! clients can bubble them up with consistent context.
use battle_core::{ActionError, ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown hero '{0}'")]
    UnknownHero(String),

    #[error("unknown boss '{0}'")]
    UnknownBoss(String),

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("{kind} '{id}' is still locked")]
    Locked { kind: UnlockKind, id: String },

    #[error("{kind} '{id}' is already unlocked")]
    AlreadyUnlocked { kind: UnlockKind, id: String },

    #[error("{kind} '{id}' cannot be bought")]
    NotForSale { kind: UnlockKind, id: String },

    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    #[error("no battle in progress")]
    NoActiveBattle,

    #[error("battle has not been decided yet")]
    BattleNotResolved,

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action(err) => err.severity(),
            Self::NoActiveBattle | Self::BattleNotResolved => ErrorSeverity::Recoverable,
            Self::Repository(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownHero(_) => "RUNTIME_UNKNOWN_HERO",
            Self::UnknownBoss(_) => "RUNTIME_UNKNOWN_BOSS",
            Self::UnknownItem(_) => "RUNTIME_UNKNOWN_ITEM",
            Self::Locked { .. } => "RUNTIME_LOCKED",
            Self::AlreadyUnlocked { .. } => "RUNTIME_ALREADY_UNLOCKED",
            Self::NotForSale { .. } => "RUNTIME_NOT_FOR_SALE",
            Self::InsufficientGold { .. } => "RUNTIME_INSUFFICIENT_GOLD",
            Self::NoActiveBattle => "RUNTIME_NO_ACTIVE_BATTLE",
            Self::BattleNotResolved => "RUNTIME_BATTLE_NOT_RESOLVED",
            Self::Action(err) => err.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}

/// What a gold purchase unlocks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum UnlockKind {
    Hero,
    Boss,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_errors_name_the_kind() {
        let locked = RuntimeError::Locked {
            kind: UnlockKind::Boss,
            id: "golem".into(),
        };
        assert_eq!(locked.to_string(), "boss 'golem' is still locked");

        let owned = RuntimeError::AlreadyUnlocked {
            kind: UnlockKind::Hero,
            id: "mage".into(),
        };
        assert_eq!(owned.to_string(), "hero 'mage' is already unlocked");
        assert_eq!(owned.error_code(), "RUNTIME_ALREADY_UNLOCKED");
    }
}
