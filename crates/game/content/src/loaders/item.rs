//! Item catalog loader.

use std::path::Path;

use battle_core::Item;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::ItemKind;

    #[test]
    fn items_default_to_single_use() {
        let items = ItemLoader::parse(
            r#"(items: [
                (id: "tea", name: "Tea", type: health, value: 10),
                (id: "totem", name: "Totem", type: other, one_time_use: false, cost: 5),
            ])"#,
        )
        .unwrap();

        assert_eq!(items[0].kind, ItemKind::Health);
        assert!(items[0].one_time_use);
        assert_eq!(items[0].cost, 100);
        assert!(!items[1].one_time_use);
        assert_eq!(items[1].cost, 5);
    }
}
