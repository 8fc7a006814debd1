//! Content loaders for reading battle data from files.
//!
//! Each loader parses one file format into `battle-core` types. RON is used for
//! rosters and catalogs, TOML for balance configuration.

pub mod bosses;
pub mod characters;
pub mod config;
pub mod factory;
pub mod item;

pub use bosses::{BossCatalog, BossLoader};
pub use characters::{CharacterCatalog, CharacterLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
