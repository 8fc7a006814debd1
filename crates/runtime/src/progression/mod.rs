//! Experience and reward bookkeeping applied to saved progression.
//!
//! The math lives in [`battle_core::progression`]; this module applies it to a
//! [`ProgressionSnapshot`](crate::repository::ProgressionSnapshot) and writes
//! the matching battle log lines.

mod experience;
mod rewards;

pub use experience::{ExperienceService, XpAward};
pub use rewards::RewardSummary;

pub(crate) use rewards::{BattleHero, settle_rewards};
