//! Saved progression data.

use std::collections::BTreeMap;

use battle_core::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Level and experience of one hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterProgress {
    pub level: u32,
    /// Cumulative experience since level 1. Keeps growing past the level cap.
    pub experience: u64,
    pub skills: Vec<String>,
}

impl Default for CharacterProgress {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            skills: Vec::new(),
        }
    }
}

/// Everything that persists between battles.
///
/// Field names follow the camelCase layout of the existing save format so old
/// save files keep loading; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressionSnapshot {
    pub gold: u32,
    /// Highest level across the roster.
    pub player_level: u32,
    pub highest_level: u32,
    pub total_gold_earned: u64,
    pub battles_won: u32,
    pub battles_lost: u32,
    /// Bosses beaten at least once, in order of first defeat.
    pub defeated_bosses: Vec<String>,
    pub boss_defeat_counts: BTreeMap<String, u32>,
    pub unlocked_characters: Vec<String>,
    pub unlocked_enemies: Vec<String>,
    pub achievements: Vec<String>,
    /// Owned items, copied into each battle.
    pub inventory: Vec<Item>,
    pub characters: BTreeMap<String, CharacterProgress>,
    pub saved_at: Option<DateTime<Utc>>,
}

impl ProgressionSnapshot {
    pub const STARTING_CHARACTER: &'static str = "knight";
    pub const STARTING_ENEMY: &'static str = "dragon";

    pub fn character_mut(&mut self, id: &str) -> &mut CharacterProgress {
        self.characters.entry(id.to_owned()).or_default()
    }

    /// Battle level of a hero. Heroes that never fought are level 1.
    pub fn character_level(&self, id: &str) -> u32 {
        self.characters.get(id).map_or(1, |progress| progress.level.max(1))
    }

    /// Recomputes the roster-wide level fields after a hero changed level.
    pub fn refresh_player_level(&mut self) {
        let roster = self
            .characters
            .values()
            .map(|progress| progress.level)
            .max()
            .unwrap_or(1)
            .max(1);
        self.player_level = roster;
        self.highest_level = self.highest_level.max(roster);
    }

    pub fn is_character_unlocked(&self, id: &str) -> bool {
        self.unlocked_characters.iter().any(|unlocked| unlocked == id)
    }

    pub fn is_enemy_unlocked(&self, id: &str) -> bool {
        self.unlocked_enemies.iter().any(|unlocked| unlocked == id)
    }

    /// Returns false when the hero was already unlocked.
    pub fn unlock_character(&mut self, id: &str) -> bool {
        if self.is_character_unlocked(id) {
            return false;
        }
        self.unlocked_characters.push(id.to_owned());
        true
    }

    /// Returns false when the boss was already unlocked.
    pub fn unlock_enemy(&mut self, id: &str) -> bool {
        if self.is_enemy_unlocked(id) {
            return false;
        }
        self.unlocked_enemies.push(id.to_owned());
        true
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
        self.total_gold_earned = self.total_gold_earned.saturating_add(u64::from(amount));
    }

    /// Deducts `amount` if affordable. Returns false and leaves gold untouched
    /// otherwise.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        match self.gold.checked_sub(amount) {
            Some(rest) => {
                self.gold = rest;
                true
            }
            None => false,
        }
    }

    /// Counts a win against `boss_id`. Returns true on the first win.
    pub fn record_defeat(&mut self, boss_id: &str) -> bool {
        *self.boss_defeat_counts.entry(boss_id.to_owned()).or_insert(0) += 1;
        if self.defeated_bosses.iter().any(|id| id == boss_id) {
            return false;
        }
        self.defeated_bosses.push(boss_id.to_owned());
        true
    }

    pub fn has_defeated(&self, boss_id: &str) -> bool {
        self.defeated_bosses.iter().any(|id| id == boss_id)
    }

    /// Returns false when the achievement was already earned.
    pub fn grant_achievement(&mut self, id: &str) -> bool {
        if self.achievements.iter().any(|earned| earned == id) {
            return false;
        }
        self.achievements.push(id.to_owned());
        true
    }
}

impl Default for ProgressionSnapshot {
    fn default() -> Self {
        Self {
            gold: 0,
            player_level: 1,
            highest_level: 1,
            total_gold_earned: 0,
            battles_won: 0,
            battles_lost: 0,
            defeated_bosses: Vec::new(),
            boss_defeat_counts: BTreeMap::new(),
            unlocked_characters: vec![Self::STARTING_CHARACTER.to_owned()],
            unlocked_enemies: vec![Self::STARTING_ENEMY.to_owned()],
            achievements: Vec::new(),
            inventory: Vec::new(),
            characters: BTreeMap::new(),
            saved_at: None,
        }
    }
}
