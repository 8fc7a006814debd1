//! Experience awards and level-ups.

use battle_core::progression::{level_for_experience, skills_learned_at};
use battle_core::{BattleConfig, CharacterClass, Outcome};

use crate::repository::CharacterProgress;

/// What one experience award did to a hero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XpAward {
    pub xp_gained: u32,
    pub leveled_up: bool,
    pub levels_gained: u32,
    pub old_level: u32,
    pub new_level: u32,
    /// The hero sits at the level cap after this award.
    pub max_level: bool,
    pub skills_learned: Vec<String>,
    pub source: Outcome,
}

/// Applies experience to hero progress.
#[derive(Clone, Copy, Debug)]
pub struct ExperienceService {
    max_level: u32,
}

impl ExperienceService {
    pub fn new(max_level: u32) -> Self {
        Self {
            max_level: max_level.max(1),
        }
    }

    pub fn from_rules(rules: &BattleConfig) -> Self {
        Self::new(rules.max_level)
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Adds `amount` experience and applies every level-up it pays for.
    ///
    /// Levels never go down and stop at the cap; experience beyond the cap is
    /// kept.
    pub fn award_xp(
        &self,
        hero_id: &str,
        progress: &mut CharacterProgress,
        class: CharacterClass,
        amount: u32,
        source: Outcome,
    ) -> XpAward {
        tracing::debug!(hero = hero_id, amount, %source, "awarding experience");

        let old_level = progress.level.max(1);
        progress.experience = progress.experience.saturating_add(u64::from(amount));
        let new_level = level_for_experience(progress.experience, self.max_level).max(old_level);
        progress.level = new_level;

        let mut skills_learned = Vec::new();
        for level in old_level + 1..=new_level {
            for skill in skills_learned_at(class, level) {
                if !progress.skills.iter().any(|known| known == skill) {
                    progress.skills.push(skill.to_owned());
                    skills_learned.push(skill.to_owned());
                }
            }
        }

        if new_level > old_level {
            tracing::info!(hero = hero_id, old_level, new_level, "hero leveled up");
        }

        XpAward {
            xp_gained: amount,
            leveled_up: new_level > old_level,
            levels_gained: new_level - old_level,
            old_level,
            new_level,
            max_level: new_level >= self.max_level,
            skills_learned,
            source,
        }
    }
}
