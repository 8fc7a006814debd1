//! Read-only hero, boss and item definitions.

use crate::state::{Attack, Boss, ClassTrait, Combatant, EnemyTier, Item, Phase};

/// Hero class, which decides per-level stat growth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharacterClass {
    Paladin,
    Knight,
    Archer,
    Mage,
    #[default]
    Adventurer,
}

/// Stats gained per level above 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatGains {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub holy_power: u32,
}

impl CharacterClass {
    pub const fn stat_gains(self) -> StatGains {
        let (health, attack, defense, holy_power) = match self {
            Self::Paladin => (12, 3, 4, 5),
            Self::Knight => (14, 4, 5, 0),
            Self::Archer => (10, 5, 3, 0),
            Self::Mage => (8, 6, 2, 0),
            Self::Adventurer => (8, 2, 2, 0),
        };
        StatGains {
            health,
            attack,
            defense,
            holy_power,
        }
    }
}

/// Base definition of a playable hero at level 1.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterTemplate {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class: CharacterClass,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub attacks: Vec<Attack>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class_trait: Option<ClassTrait>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl CharacterTemplate {
    /// Builds a battle instance scaled to `level` with the class stat gains.
    ///
    /// The instance starts at full health with every cooldown cleared.
    pub fn instantiate(&self, level: u32) -> Combatant {
        let level = level.max(1);
        let gains = self.class.stat_gains();
        let steps = level - 1;

        let mut attacks = self.attacks.clone();
        attacks.iter_mut().for_each(Attack::reset_cooldown);

        let mut unit = Combatant::new(
            self.id.clone(),
            self.name.clone(),
            self.max_health + gains.health * steps,
        )
        .with_stats(
            self.attack + gains.attack * steps,
            self.defense + gains.defense * steps,
            self.speed,
        )
        .with_level(level)
        .with_attacks(attacks);

        unit.class_trait = self.class_trait.map(|class_trait| match class_trait {
            ClassTrait::HolyPower(power) => ClassTrait::HolyPower(power + gains.holy_power * steps),
            other => other,
        });
        unit
    }
}

/// Base definition of a boss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossTemplate {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "BossTemplate::default_level"))]
    pub level: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attacks: Vec<Attack>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phases: Vec<Phase>,
    #[cfg_attr(feature = "serde", serde(default = "BossTemplate::default_gold_reward"))]
    pub gold_reward: u32,
    #[cfg_attr(feature = "serde", serde(default = "BossTemplate::default_attack_chance"))]
    pub attack_chance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: EnemyTier,
    /// Enemy ids that become available after the first win.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocks: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl BossTemplate {
    #[cfg(feature = "serde")]
    fn default_level() -> u32 {
        1
    }

    #[cfg(feature = "serde")]
    fn default_gold_reward() -> u32 {
        Boss::DEFAULT_GOLD_REWARD
    }

    #[cfg(feature = "serde")]
    fn default_attack_chance() -> f64 {
        Boss::DEFAULT_ATTACK_CHANCE
    }

    /// Builds a fresh boss: full health, cooldowns cleared, base phase.
    pub fn instantiate(&self) -> Boss {
        let mut attacks = self.attacks.clone();
        attacks.iter_mut().for_each(Attack::reset_cooldown);

        let unit = Combatant::new(self.id.clone(), self.name.clone(), self.max_health)
            .with_stats(self.attack, self.defense, self.speed)
            .with_level(self.level)
            .with_attacks(attacks);

        Boss {
            unit,
            phases: self.phases.clone(),
            current_phase: 0,
            gold_reward: self.gold_reward,
            attack_chance: self.attack_chance,
            tier: self.tier,
            unlocks: self.unlocks.clone(),
        }
    }
}

/// Template catalog consumed when a battle starts.
pub trait TemplateOracle: Send + Sync {
    fn character_template(&self, id: &str) -> Option<CharacterTemplate>;

    fn boss_template(&self, id: &str) -> Option<BossTemplate>;

    fn item(&self, id: &str) -> Option<Item>;

    /// Every hero id, in catalog order.
    fn character_ids(&self) -> Vec<String>;

    /// Every boss id, in catalog order.
    fn boss_ids(&self) -> Vec<String>;

    /// Every item offered for sale.
    fn shop_items(&self) -> Vec<Item> {
        Vec::new()
    }

    /// Gold needed to unlock a hero. `None` means it cannot be bought.
    fn character_unlock_cost(&self, _id: &str) -> Option<u32> {
        None
    }

    /// Gold needed to unlock a boss. `None` means it cannot be bought.
    fn enemy_unlock_cost(&self, _id: &str) -> Option<u32> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AttackType;

    fn paladin() -> CharacterTemplate {
        CharacterTemplate {
            id: "paladin".into(),
            name: "Paladin".into(),
            class: CharacterClass::Paladin,
            max_health: 180,
            attack: 14,
            defense: 12,
            speed: 8,
            attacks: vec![
                Attack::new("smite", "Smite", 20, AttackType::Magical),
                Attack::new("judgment", "Judgment", 35, AttackType::Magical).with_cooldown(4),
            ],
            class_trait: Some(ClassTrait::HolyPower(10)),
            description: String::new(),
        }
    }

    #[test]
    fn level_one_instance_matches_template() {
        let unit = paladin().instantiate(1);
        assert_eq!(unit.max_health, 180);
        assert_eq!(unit.current_health, 180);
        assert_eq!((unit.attack, unit.defense, unit.speed), (14, 12, 8));
        assert_eq!(unit.class_trait, Some(ClassTrait::HolyPower(10)));
    }

    #[test]
    fn instance_scales_with_class_gains() {
        let unit = paladin().instantiate(4);
        assert_eq!(unit.level, 4);
        assert_eq!(unit.max_health, 180 + 12 * 3);
        assert_eq!(unit.current_health, unit.max_health);
        assert_eq!(unit.attack, 14 + 3 * 3);
        assert_eq!(unit.defense, 12 + 4 * 3);
        assert_eq!(unit.class_trait, Some(ClassTrait::HolyPower(25)));
    }

    #[test]
    fn instances_start_with_cooldowns_cleared() {
        let mut template = paladin();
        template.attacks[1].current_cooldown = 2;
        let unit = template.instantiate(0);
        assert_eq!(unit.level, 1);
        assert!(unit.attacks.iter().all(Attack::is_ready));
    }

    #[test]
    fn boss_instance_starts_in_base_phase() {
        let template = BossTemplate {
            id: "dragon".into(),
            name: "Ancient Fire Dragon".into(),
            level: 5,
            max_health: 200,
            attack: 25,
            defense: 15,
            speed: 12,
            attacks: vec![Attack::new("claw", "Claw Strike", 28, AttackType::Physical).with_cooldown(1)],
            phases: vec![Phase {
                health_threshold: 0.5,
                attack_multiplier: 1.3,
                defense_multiplier: 1.1,
            }],
            gold_reward: 100,
            attack_chance: 0.7,
            tier: EnemyTier::Boss,
            unlocks: vec!["necromancer".into()],
            description: String::new(),
        };
        let boss = template.instantiate();
        assert_eq!(boss.current_phase, 0);
        assert_eq!(boss.unit.level, 5);
        assert_eq!(boss.unit.current_health, 200);
        assert_eq!(boss.gold_reward, 100);
        assert_eq!(boss.unlocks, ["necromancer"]);
    }

    #[test]
    fn class_names_parse() {
        assert_eq!("mage".parse::<CharacterClass>(), Ok(CharacterClass::Mage));
        assert_eq!(CharacterClass::Knight.to_string(), "knight");
    }
}
