//! Combat resolution.
//!
//! One call to [`resolve_attack`] resolves exactly one attack use: accuracy,
//! multi-hit or single-hit damage, crits, mitigation, status application and
//! the attacker's heal/barrier/dodge side effects. The pure formulas live in
//! [`damage`] and [`hit`] so they can be tested without a battle.

pub mod damage;
pub mod effects;
pub mod hit;
pub mod result;

pub use damage::{multi_hit_strike_damage, self_heal_amount, single_hit_damage};
pub use effects::{apply_attacker_effects, apply_status_effect};
pub use hit::check_hit;
pub use result::{AttackOutcome, AttackRef, AttackResult, resolve_attack};
