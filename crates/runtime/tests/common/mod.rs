#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use battle_core::{
    Attack, AttackType, BossTemplate, CharacterClass, CharacterTemplate, EnemyTier, Item, ItemKind,
    ScriptedRng, TemplateOracle,
};
use battle_runtime::repository::Result as RepoResult;
use battle_runtime::{
    BattleSession, CharacterProgress, InMemoryProgressionRepository, ProgressionRepository,
    ProgressionSnapshot, RepositoryError,
};

pub const POKE: usize = 0;
pub const FINISHER: usize = 1;

/// Small arena with lopsided numbers so every fight ends in one exchange.
pub struct ArenaOracle {
    heroes: Vec<CharacterTemplate>,
    bosses: Vec<BossTemplate>,
    items: Vec<Item>,
    hero_costs: BTreeMap<String, u32>,
    boss_costs: BTreeMap<String, u32>,
}

fn hero(id: &str, name: &str, speed: u32) -> CharacterTemplate {
    CharacterTemplate {
        id: id.into(),
        name: name.into(),
        class: CharacterClass::Knight,
        max_health: 100,
        attack: 10,
        defense: 5,
        speed,
        attacks: vec![
            Attack::new("poke", "Poke", 1, AttackType::Physical),
            Attack::new("finisher", "Finisher", 500, AttackType::Physical).with_cooldown(2),
        ],
        class_trait: None,
        description: String::new(),
    }
}

fn boss(id: &str, name: &str, level: u32, speed: u32, unlocks: &[&str]) -> BossTemplate {
    BossTemplate {
        id: id.into(),
        name: name.into(),
        level,
        max_health: 200,
        attack: 20,
        defense: 8,
        speed,
        attacks: vec![Attack::new("crush", "Crush", 500, AttackType::Physical)],
        phases: Vec::new(),
        gold_reward: 100,
        attack_chance: 0.7,
        tier: EnemyTier::Boss,
        unlocks: unlocks.iter().map(|id| (*id).to_owned()).collect(),
        description: String::new(),
    }
}

impl ArenaOracle {
    pub fn new() -> Self {
        let tonic = Item {
            cost: 20,
            ..Item::new("tonic", "Strength Tonic", ItemKind::Attack, 5)
        };
        let charm = Item {
            cost: 30,
            ..Item::new("charm", "Lucky Charm", ItemKind::Health, 10).reusable()
        };

        Self {
            heroes: vec![
                hero("knight", "Squire", 10),
                hero("ranger", "Ranger", 10),
                hero("hermit", "Hermit", 10),
            ],
            bosses: vec![
                boss("dragon", "Training Wyrm", 5, 5, &["lich"]),
                boss("lich", "Lich", 6, 5, &[]),
                boss("sprinter", "Sprinter", 1, 50, &[]),
            ],
            items: vec![tonic, charm],
            hero_costs: BTreeMap::from([("ranger".to_owned(), 50)]),
            boss_costs: BTreeMap::from([("lich".to_owned(), 80), ("sprinter".to_owned(), 10)]),
        }
    }
}

impl TemplateOracle for ArenaOracle {
    fn character_template(&self, id: &str) -> Option<CharacterTemplate> {
        self.heroes.iter().find(|hero| hero.id == id).cloned()
    }

    fn boss_template(&self, id: &str) -> Option<BossTemplate> {
        self.bosses.iter().find(|boss| boss.id == id).cloned()
    }

    fn item(&self, id: &str) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn character_ids(&self) -> Vec<String> {
        self.heroes.iter().map(|hero| hero.id.clone()).collect()
    }

    fn boss_ids(&self) -> Vec<String> {
        self.bosses.iter().map(|boss| boss.id.clone()).collect()
    }

    fn shop_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn character_unlock_cost(&self, id: &str) -> Option<u32> {
        self.hero_costs.get(id).copied()
    }

    fn enemy_unlock_cost(&self, id: &str) -> Option<u32> {
        self.boss_costs.get(id).copied()
    }
}

/// Repository whose saves always fail.
pub struct BrokenDisk;

impl ProgressionRepository for BrokenDisk {
    fn load(&self) -> RepoResult<Option<ProgressionSnapshot>> {
        Ok(None)
    }

    fn save(&self, _snapshot: &ProgressionSnapshot) -> RepoResult<()> {
        Err(RepositoryError::Io(std::io::Error::other("disk full")))
    }

    fn clear(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Repository that remembers how many saves it received.
#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryProgressionRepository,
    saves: Mutex<u32>,
}

impl CountingRepository {
    pub fn saves(&self) -> u32 {
        *self.saves.lock().unwrap()
    }
}

impl ProgressionRepository for CountingRepository {
    fn load(&self) -> RepoResult<Option<ProgressionSnapshot>> {
        self.inner.load()
    }

    fn save(&self, snapshot: &ProgressionSnapshot) -> RepoResult<()> {
        *self.saves.lock().unwrap() += 1;
        self.inner.save(snapshot)
    }

    fn clear(&self) -> RepoResult<()> {
        self.inner.clear()
    }
}

/// Snapshot where the starting hero already sits at `level`.
pub fn veteran(level: u32) -> ProgressionSnapshot {
    let mut snapshot = ProgressionSnapshot::default();
    snapshot.characters.insert(
        "knight".into(),
        CharacterProgress {
            level,
            experience: battle_core::progression::xp_required_for_level(level),
            skills: Vec::new(),
        },
    );
    snapshot.refresh_player_level();
    snapshot
}

pub fn session_with(repository: Arc<dyn ProgressionRepository>) -> BattleSession {
    BattleSession::new(
        Arc::new(ArenaOracle::new()),
        repository,
        Default::default(),
        Box::new(ScriptedRng::default()),
    )
}

pub fn session_from(snapshot: ProgressionSnapshot) -> BattleSession {
    session_with(Arc::new(InMemoryProgressionRepository::with_snapshot(snapshot)))
}
