//! Runtime adapter exposing the content catalog through `battle-core`'s
//! [`TemplateOracle`] trait.
//!
//! The data is immutable at runtime; dynamic state lives in repositories or in
//! the active [`battle_core::BattleState`].

use std::sync::Arc;

use battle_content::Catalog;
use battle_core::{BossTemplate, CharacterTemplate, Item, TemplateOracle};

/// TemplateOracle implementation backed by a shared [`Catalog`].
#[derive(Clone)]
pub struct CatalogOracle {
    catalog: Arc<Catalog>,
}

impl CatalogOracle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl TemplateOracle for CatalogOracle {
    fn character_template(&self, id: &str) -> Option<CharacterTemplate> {
        self.catalog.character(id).cloned()
    }

    fn boss_template(&self, id: &str) -> Option<BossTemplate> {
        self.catalog.boss(id).cloned()
    }

    fn item(&self, id: &str) -> Option<Item> {
        self.catalog.item(id).cloned()
    }

    fn character_ids(&self) -> Vec<String> {
        self.catalog.characters().iter().map(|c| c.id.clone()).collect()
    }

    fn boss_ids(&self) -> Vec<String> {
        self.catalog.bosses().iter().map(|b| b.id.clone()).collect()
    }

    fn shop_items(&self) -> Vec<Item> {
        self.catalog.items().to_vec()
    }

    fn character_unlock_cost(&self, id: &str) -> Option<u32> {
        self.catalog.character_cost(id)
    }

    fn enemy_unlock_cost(&self, id: &str) -> Option<u32> {
        self.catalog.enemy_cost(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_builtin_catalog() {
        let oracle = CatalogOracle::new(Catalog::builtin().unwrap());
        assert_eq!(oracle.character_ids(), ["knight", "mage", "archer", "paladin"]);
        assert_eq!(oracle.boss_template("golem").map(|b| b.level), Some(8));
        assert!(oracle.character_template("bard").is_none());
        assert_eq!(oracle.character_unlock_cost("mage"), Some(100));
        assert_eq!(oracle.enemy_unlock_cost("dragon_king"), Some(600));
        assert!(!oracle.shop_items().is_empty());
    }
}
