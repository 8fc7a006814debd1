//! Errors for player and boss actions that arrive at the wrong time or with bad input.

use crate::error::{ErrorSeverity, GameError};
use crate::state::BattlePhase;

/// An action was refused. The battle state is untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("battle is not active")]
    BattleInactive,

    #[error("not the player's turn (phase {phase:?})")]
    NotPlayerTurn { phase: BattlePhase },

    #[error("boss cannot act during phase {phase:?}")]
    NotBossTurn { phase: BattlePhase },

    #[error("attack slot {slot} does not exist ({available} attacks)")]
    UnknownAttackSlot { slot: usize, available: usize },

    #[error("{name} is on cooldown for {remaining} more turn(s)")]
    AttackOnCooldown { name: String, remaining: u32 },

    #[error("item {item_id} is not in the inventory")]
    ItemNotInInventory { item_id: String },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotPlayerTurn { .. } | Self::NotBossTurn { .. } | Self::AttackOnCooldown { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::BattleInactive
            | Self::UnknownAttackSlot { .. }
            | Self::ItemNotInInventory { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BattleInactive => "BATTLE_INACTIVE",
            Self::NotPlayerTurn { .. } => "NOT_PLAYER_TURN",
            Self::NotBossTurn { .. } => "NOT_BOSS_TURN",
            Self::UnknownAttackSlot { .. } => "UNKNOWN_ATTACK_SLOT",
            Self::AttackOnCooldown { .. } => "ATTACK_ON_COOLDOWN",
            Self::ItemNotInInventory { .. } => "ITEM_NOT_IN_INVENTORY",
        }
    }
}
