//! Boss roster loader.

use std::collections::BTreeMap;
use std::path::Path;

use battle_core::BossTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Boss roster structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BossCatalog {
    pub bosses: Vec<BossTemplate>,
    /// Gold needed to unlock a boss early instead of earning it.
    #[serde(default)]
    pub unlock_costs: BTreeMap<String, u32>,
}

/// Loader for boss rosters from RON files.
pub struct BossLoader;

impl BossLoader {
    /// Load a boss roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<BossCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a boss roster from RON text.
    pub fn parse(content: &str) -> LoadResult<BossCatalog> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse boss catalog RON: {}", e))
    }
}
