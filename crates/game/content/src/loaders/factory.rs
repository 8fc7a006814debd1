//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, Item};

use crate::catalog::Catalog;
use crate::loaders::{
    BossCatalog, BossLoader, CharacterCatalog, CharacterLoader, ConfigLoader, ItemLoader, LoadResult,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── characters.ron
/// ├── bosses.ron
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load balance configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the hero roster from `characters.ron`.
    pub fn load_characters(&self) -> LoadResult<CharacterCatalog> {
        CharacterLoader::load(&self.data_dir.join("characters.ron"))
    }

    /// Load the boss roster from `bosses.ron`.
    pub fn load_bosses(&self) -> LoadResult<BossCatalog> {
        BossLoader::load(&self.data_dir.join("bosses.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load and validate the full catalog.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        Catalog::from_parts(self.load_characters()?, self.load_bosses()?, self.load_items()?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
