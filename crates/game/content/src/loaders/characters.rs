//! Hero roster loader.

use std::collections::BTreeMap;
use std::path::Path;

use battle_core::CharacterTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Hero roster structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterCatalog {
    pub characters: Vec<CharacterTemplate>,
    /// Gold needed to unlock a hero. Heroes without an entry cannot be bought.
    #[serde(default)]
    pub unlock_costs: BTreeMap<String, u32>,
}

/// Loader for hero rosters from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load a hero roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<CharacterCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a hero roster from RON text.
    pub fn parse(content: &str) -> LoadResult<CharacterCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character catalog RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{CharacterClass, ClassTrait, EffectSpec};

    #[test]
    fn parses_minimal_hero_with_defaults() {
        let catalog = CharacterLoader::parse(
            r#"(
                characters: [(
                    id: "squire",
                    name: "Squire",
                    max_health: 90,
                    attack: 8,
                    defense: 4,
                    speed: 9,
                    attacks: [(id: "poke", name: "Poke", damage: 12)],
                )],
            )"#,
        )
        .unwrap();

        let squire = &catalog.characters[0];
        assert_eq!(squire.class, CharacterClass::Adventurer);
        assert_eq!(squire.attacks[0].accuracy, 95);
        assert!(squire.class_trait.is_none());
        assert!(catalog.unlock_costs.is_empty());
    }

    #[test]
    fn parses_effects_and_traits() {
        let catalog = CharacterLoader::parse(
            r#"(
                characters: [(
                    id: "cleric",
                    name: "Cleric",
                    class: paladin,
                    max_health: 100,
                    attack: 10,
                    defense: 10,
                    speed: 10,
                    class_trait: Some(holy_power(12)),
                    attacks: [(
                        id: "ward",
                        name: "Ward",
                        type: support,
                        cooldown: 3,
                        effects: [Barrier(30), InflictStatus(kind: weaken, chance: 25)],
                    )],
                )],
                unlock_costs: {"cleric": 75},
            )"#,
        )
        .unwrap();

        let cleric = &catalog.characters[0];
        assert_eq!(cleric.class_trait, Some(ClassTrait::HolyPower(12)));
        assert_eq!(cleric.attacks[0].barrier(), Some(30));
        assert!(matches!(
            cleric.attacks[0].effects[1],
            EffectSpec::InflictStatus { chance: 25, .. }
        ));
        assert_eq!(catalog.unlock_costs["cleric"], 75);
    }

    #[test]
    fn reports_parse_errors() {
        let err = CharacterLoader::parse("(characters: [(id: 3)])").unwrap_err();
        assert!(err.to_string().contains("character catalog"));
    }
}
