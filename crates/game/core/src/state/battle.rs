use bitflags::bitflags;

use super::{Boss, Combatant, Item, Phase};
use crate::config::BattleConfig;

/// Which combatant an operation concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Boss,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Boss,
            Self::Boss => Self::Player,
        }
    }
}

/// How a battle ended, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Victory)
    }
}

/// Turn state machine.
///
/// ```text
/// PlayerTurn -> BossTurnPending -> BossTurn -> PlayerTurn ...
///      \______________________________\_____-> Resolved(outcome)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    PlayerTurn,
    /// Player turn bookkeeping is done; the boss acts next.
    BossTurnPending,
    BossTurn,
    Resolved(Outcome),
}

impl BattlePhase {
    pub const fn is_player_turn(self) -> bool {
        matches!(self, Self::PlayerTurn)
    }

    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }
}

bitflags! {
    /// One-shot battle modifiers outside the status effect lists.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TransientFlags: u8 {
        const PLAYER_DODGING = 1 << 0;
        const PLAYER_BURNING = 1 << 1;
        const PLAYER_SLOWED  = 1 << 2;
        const BOSS_STUNNED   = 1 << 3;
        const BOSS_BURNING   = 1 << 4;
    }
}

/// Append-only narration of a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines appended after the first `mark` lines.
    pub fn since(&self, mark: usize) -> &[String] {
        self.lines.get(mark..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Index of the first line containing `needle`.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Aggregate root for one battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub player: Combatant,
    pub boss: Boss,
    /// Cleared the moment either side reaches 0 health. No attack resolves afterwards.
    pub active: bool,
    pub phase: BattlePhase,
    /// Completed rounds (player turn plus boss turn).
    pub turn_count: u32,
    pub log: BattleLog,
    /// Damage the player can still absorb before losing health.
    pub barrier: u32,
    pub flags: TransientFlags,
    /// Items the player brought into this battle.
    pub inventory: Vec<Item>,
    pub rules: BattleConfig,
}

impl BattleState {
    /// Sets up a fresh battle and writes the opening lines.
    ///
    /// Malformed boss phases are dropped. The player opens unless the boss is
    /// strictly faster, in which case the battle starts in
    /// [`BattlePhase::BossTurnPending`].
    pub fn new(player: Combatant, mut boss: Boss, inventory: Vec<Item>, rules: BattleConfig) -> Self {
        let mut log = BattleLog::new();

        let before = boss.phases.len();
        boss.phases.retain(Phase::is_well_formed);
        if boss.phases.len() < before {
            log.push(format!(
                "{} has unstable phase data; {} phase(s) ignored.",
                boss.unit.name,
                before - boss.phases.len()
            ));
        }

        log.push(format!(
            "Level {} {} faces off against {}!",
            player.level, player.name, boss.unit.name
        ));
        log.push(format!(
            "{}: {} HP, {} ATK, {} DEF",
            player.name, player.max_health, player.attack, player.defense
        ));
        log.push("The battle begins!");

        let phase = if player.effective_speed() >= boss.unit.effective_speed() {
            BattlePhase::PlayerTurn
        } else {
            log.push(format!("{} is faster and strikes first!", boss.unit.name));
            BattlePhase::BossTurnPending
        };

        Self {
            player,
            boss,
            active: true,
            phase,
            turn_count: 0,
            log,
            barrier: 0,
            flags: TransientFlags::empty(),
            inventory,
            rules,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Boss => &self.boss.unit,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Boss => &mut self.boss.unit,
        }
    }

    pub fn is_player_turn(&self) -> bool {
        self.active && self.phase.is_player_turn()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Logs a defeat and deactivates the battle if `side` is at 0 health.
    ///
    /// Returns true when the battle ended here.
    pub fn check_defeat(&mut self, side: Side) -> bool {
        if !self.combatant(side).is_defeated() {
            return false;
        }
        if self.active {
            self.log
                .push(format!("{} has been defeated!", self.combatant(side).name));
            self.active = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(speed: u32) -> Combatant {
        Combatant::new("knight", "Knight", 150).with_stats(15, 10, speed)
    }

    fn dragon(speed: u32) -> Boss {
        Boss::new(Combatant::new("dragon", "Ancient Fire Dragon", 200).with_stats(25, 15, speed))
    }

    #[test]
    fn opening_lines_and_player_initiative() {
        let state = BattleState::new(hero(12), dragon(12), Vec::new(), BattleConfig::default());
        assert!(state.active);
        assert_eq!(state.phase, BattlePhase::PlayerTurn);
        assert_eq!(
            state.log.lines(),
            [
                "Level 1 Knight faces off against Ancient Fire Dragon!",
                "Knight: 150 HP, 15 ATK, 10 DEF",
                "The battle begins!",
            ]
        );
    }

    #[test]
    fn faster_boss_goes_first() {
        let state = BattleState::new(hero(10), dragon(12), Vec::new(), BattleConfig::default());
        assert_eq!(state.phase, BattlePhase::BossTurnPending);
        assert!(!state.is_player_turn());
        assert_eq!(
            state.log.last(),
            Some("Ancient Fire Dragon is faster and strikes first!")
        );
    }

    #[test]
    fn malformed_phases_are_dropped() {
        let boss = dragon(1).with_phases(vec![
            Phase {
                health_threshold: 0.5,
                attack_multiplier: f64::INFINITY,
                defense_multiplier: 1.0,
            },
            Phase {
                health_threshold: 0.25,
                attack_multiplier: 1.5,
                defense_multiplier: 1.2,
            },
        ]);
        let state = BattleState::new(hero(5), boss, Vec::new(), BattleConfig::default());
        assert_eq!(state.boss.phases.len(), 1);
        assert!(state.log.contains("1 phase(s) ignored"));
    }

    #[test]
    fn defeat_check_logs_once() {
        let mut state = BattleState::new(hero(5), dragon(1), Vec::new(), BattleConfig::default());
        state.boss.unit.take_damage(1_000);
        assert!(state.check_defeat(Side::Boss));
        assert!(state.check_defeat(Side::Boss));
        assert!(!state.active);
        let lines = state
            .log
            .iter()
            .filter(|line| *line == "Ancient Fire Dragon has been defeated!")
            .count();
        assert_eq!(lines, 1);
    }

    #[test]
    fn log_since_mark() {
        let mut log = BattleLog::new();
        log.push("a");
        let mark = log.len();
        log.push("b");
        log.push("c");
        assert_eq!(log.since(mark), ["b", "c"]);
        assert!(log.since(10).is_empty());
    }
}
