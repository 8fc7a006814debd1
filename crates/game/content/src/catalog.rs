//! In-memory template catalog.

use std::collections::{BTreeMap, HashSet};

use battle_core::{BossTemplate, CharacterTemplate, Item};

use crate::loaders::{BossCatalog, BossLoader, CharacterCatalog, CharacterLoader, ItemLoader, LoadResult};

const BUILTIN_CHARACTERS: &str = include_str!("../data/characters.ron");
const BUILTIN_BOSSES: &str = include_str!("../data/bosses.ron");
const BUILTIN_ITEMS: &str = include_str!("../data/items.ron");

/// Every hero, boss, and item the game knows about, plus unlock prices.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: Vec<CharacterTemplate>,
    bosses: Vec<BossTemplate>,
    items: Vec<Item>,
    character_costs: BTreeMap<String, u32>,
    enemy_costs: BTreeMap<String, u32>,
}

impl Catalog {
    /// Catalog compiled into the binary.
    pub fn builtin() -> LoadResult<Self> {
        Self::from_parts(
            CharacterLoader::parse(BUILTIN_CHARACTERS)?,
            BossLoader::parse(BUILTIN_BOSSES)?,
            ItemLoader::parse(BUILTIN_ITEMS)?,
        )
    }

    /// Assembles a catalog and checks that ids are unique and cross references
    /// resolve.
    pub fn from_parts(
        characters: CharacterCatalog,
        bosses: BossCatalog,
        items: Vec<Item>,
    ) -> LoadResult<Self> {
        let catalog = Self {
            characters: characters.characters,
            bosses: bosses.bosses,
            items,
            character_costs: characters.unlock_costs,
            enemy_costs: bosses.unlock_costs,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> LoadResult<()> {
        ensure_unique("character", self.characters.iter().map(|c| c.id.as_str()))?;
        ensure_unique("boss", self.bosses.iter().map(|b| b.id.as_str()))?;
        ensure_unique("item", self.items.iter().map(|i| i.id.as_str()))?;

        for character in &self.characters {
            if character.max_health == 0 {
                anyhow::bail!("Character '{}' has zero max health", character.id);
            }
        }
        for boss in &self.bosses {
            if boss.max_health == 0 {
                anyhow::bail!("Boss '{}' has zero max health", boss.id);
            }
            if let Some(missing) = boss.unlocks.iter().find(|id| self.boss(id).is_none()) {
                anyhow::bail!("Boss '{}' unlocks unknown boss '{}'", boss.id, missing);
            }
        }
        if let Some(missing) = self.character_costs.keys().find(|id| self.character(id).is_none()) {
            anyhow::bail!("Unlock cost listed for unknown character '{}'", missing);
        }
        if let Some(missing) = self.enemy_costs.keys().find(|id| self.boss(id).is_none()) {
            anyhow::bail!("Unlock cost listed for unknown boss '{}'", missing);
        }
        Ok(())
    }

    pub fn characters(&self) -> &[CharacterTemplate] {
        &self.characters
    }

    pub fn bosses(&self) -> &[BossTemplate] {
        &self.bosses
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn character(&self, id: &str) -> Option<&CharacterTemplate> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn boss(&self, id: &str) -> Option<&BossTemplate> {
        self.bosses.iter().find(|b| b.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Gold price of a hero, if it can be bought.
    pub fn character_cost(&self, id: &str) -> Option<u32> {
        self.character_costs.get(id).copied()
    }

    /// Gold price of a boss, if it can be bought.
    pub fn enemy_cost(&self, id: &str) -> Option<u32> {
        self.enemy_costs.get(id).copied()
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id '{}'", kind, id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{CharacterClass, EffectSpec, ItemKind};

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.characters().len(), 4);
        assert_eq!(catalog.bosses().len(), 5);
        assert!(catalog.item("health-potion").is_some());
    }

    #[test]
    fn builtin_roster_matches_reference_stats() {
        let catalog = Catalog::builtin().unwrap();

        let knight = catalog.character("knight").unwrap();
        assert_eq!(knight.class, CharacterClass::Knight);
        assert_eq!((knight.max_health, knight.attack, knight.defense), (150, 15, 10));
        assert_eq!(knight.attacks.len(), 4);
        assert_eq!(knight.attacks[3].heal(), Some(25));

        let archer = catalog.character("archer").unwrap();
        assert_eq!(archer.attacks[2].multi_hit(), Some(3));

        let dragon = catalog.boss("dragon").unwrap();
        assert_eq!(dragon.level, 5);
        assert_eq!(dragon.gold_reward, 100);
        assert_eq!(dragon.phases.len(), 1);
        assert!(dragon.attacks[3].effects.contains(&EffectSpec::SelfHeal(40)));

        let king = catalog.boss("dragon_king").unwrap();
        let thresholds: Vec<f64> = king.phases.iter().map(|p| p.health_threshold).collect();
        assert_eq!(thresholds, [0.75, 0.5, 0.25]);
    }

    #[test]
    fn builtin_costs() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.character_cost("paladin"), Some(500));
        assert_eq!(catalog.character_cost("knight"), None);
        assert_eq!(catalog.enemy_cost("golem"), Some(300));
        assert_eq!(catalog.enemy_cost("dragon"), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let potion = Item::new("potion", "Potion", ItemKind::Health, 10);
        let err = Catalog::from_parts(
            CharacterCatalog::default(),
            BossCatalog::default(),
            vec![potion.clone(), potion],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate item id 'potion'"));
    }

    #[test]
    fn rejects_dangling_unlocks() {
        let mut bosses = BossLoader::parse(BUILTIN_BOSSES).unwrap();
        bosses.bosses.retain(|b| b.id != "golem");
        let err = Catalog::from_parts(CharacterCatalog::default(), bosses, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("unknown boss 'golem'"));
    }
}
