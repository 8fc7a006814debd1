//! Victory and defeat consequences.

use battle_core::progression::{battle_xp, defeat_rewards};
use battle_core::{BattleConfig, BattleState, CharacterClass, Outcome, TemplateOracle};

use super::{ExperienceService, XpAward};
use crate::repository::ProgressionSnapshot;

pub const FIRST_VICTORY: &str = "first-victory";
pub const MAX_LEVEL: &str = "max-level";

/// The hero who fought, as far as rewards are concerned.
pub(crate) struct BattleHero<'a> {
    pub id: &'a str,
    pub class: CharacterClass,
}

/// Everything a finished battle changed in progression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardSummary {
    pub outcome: Outcome,
    pub gold: u32,
    pub xp: XpAward,
    /// First win against this boss.
    pub first_defeat: bool,
    /// Boss ids that became available.
    pub unlocked: Vec<String>,
    pub achievements: Vec<String>,
}

/// Applies the outcome of `state` to `snapshot` and appends the reward lines
/// to the battle log.
///
/// Victory pays the boss's gold and scaled experience, records the defeat, and
/// unlocks follow-up bosses. Defeat pays consolation gold and flat experience
/// and unlocks nothing. Either way the fighting hero receives the experience.
pub(crate) fn settle_rewards(
    snapshot: &mut ProgressionSnapshot,
    state: &mut BattleState,
    outcome: Outcome,
    hero: BattleHero<'_>,
    rules: &BattleConfig,
    experience: &ExperienceService,
    oracle: &dyn TemplateOracle,
) -> RewardSummary {
    let player_level = snapshot.player_level.max(1);
    let hero_name = state.player.name.clone();

    let (gold, xp_amount, first_defeat, unlocked) = match outcome {
        Outcome::Victory => {
            let gold = state.boss.gold_reward;
            let xp = battle_xp(&state.player, player_level, &state.boss, rules);
            snapshot.add_gold(gold);
            snapshot.battles_won += 1;
            let first_defeat = snapshot.record_defeat(&state.boss.unit.id);
            let unlocked: Vec<String> = state
                .boss
                .unlocks
                .iter()
                .filter(|id| snapshot.unlock_enemy(id))
                .cloned()
                .collect();

            state
                .log
                .push(format!("Victory! {} has been defeated!", state.boss.unit.name));
            state.log.push(format!("You earned {gold} gold!"));
            (gold, xp, first_defeat, unlocked)
        }
        Outcome::Defeat => {
            let rewards = defeat_rewards(player_level, rules);
            snapshot.add_gold(rewards.gold);
            snapshot.battles_lost += 1;

            state
                .log
                .push(format!("Defeat! {hero_name} has fallen in battle..."));
            state.log.push(format!(
                "You earned {} consolation gold for your effort.",
                rewards.gold
            ));
            (rewards.gold, rewards.experience, false, Vec::new())
        }
    };

    let xp = experience.award_xp(
        hero.id,
        snapshot.character_mut(hero.id),
        hero.class,
        xp_amount,
        outcome,
    );
    snapshot.refresh_player_level();
    state
        .log
        .push(format!("{hero_name} gained {} experience!", xp.xp_gained));

    if xp.leveled_up {
        state
            .log
            .push(format!("Level Up! You are now level {}!", xp.new_level));
        state.log.push("Your heroes have become stronger!");
        for skill in &xp.skills_learned {
            state.log.push(format!("{hero_name} learned {skill}!"));
        }
        if xp.max_level {
            state.log.push(format!(
                "{hero_name} has reached the maximum level of {}!",
                experience.max_level()
            ));
        }
    }

    for id in &unlocked {
        let name = oracle
            .boss_template(id)
            .map_or_else(|| id.clone(), |template| template.name);
        state.log.push(format!("A new challenger appears: {name}!"));
    }

    let mut achievements = Vec::new();
    if outcome.is_victory() && snapshot.battles_won == 1 && snapshot.grant_achievement(FIRST_VICTORY) {
        achievements.push(FIRST_VICTORY.to_owned());
    }
    if xp.leveled_up && xp.max_level && snapshot.grant_achievement(MAX_LEVEL) {
        achievements.push(MAX_LEVEL.to_owned());
    }

    RewardSummary {
        outcome,
        gold,
        xp,
        first_defeat,
        unlocked,
        achievements,
    }
}
