//! Data-driven battle content and loaders.
//!
//! This crate houses the hero roster, boss roster, and shop catalog, plus
//! loaders for RON/TOML data files:
//! - Character templates and unlock costs (RON)
//! - Boss templates, phases, and unlock costs (RON)
//! - Item catalogs (RON)
//! - Balance configuration (TOML)
//!
//! The built-in roster is embedded at compile time, so the runtime works with no
//! data directory. Content is consumed through runtime oracles and never
//! appears in saved progression.

#[cfg(feature = "loaders")]
pub mod catalog;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use catalog::Catalog;
#[cfg(feature = "loaders")]
pub use loaders::{
    BossCatalog, BossLoader, CharacterCatalog, CharacterLoader, ConfigLoader, ContentFactory,
    ItemCatalog, ItemLoader, LoadResult,
};
