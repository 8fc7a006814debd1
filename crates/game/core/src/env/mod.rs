//! Traits describing read-only battle inputs.
//!
//! Oracles expose hero, boss and item templates plus the randomness source. The
//! engine consumes them through traits so tests can inject fixed catalogs and
//! scripted rolls.
mod rng;
mod templates;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use templates::{BossTemplate, CharacterClass, CharacterTemplate, StatGains, TemplateOracle};
