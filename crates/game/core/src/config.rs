/// Balance constants for battle resolution and progression.
///
/// Percent values are on a 0-100 scale and compared against
/// [`RngOracle::roll_percent`](crate::env::RngOracle::roll_percent).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Damage multiplier applied on a critical hit.
    pub crit_multiplier: f64,
    pub base_crit_chance: f64,
    /// Crit chance for attacks carrying [`EffectSpec::CritFocus`](crate::state::EffectSpec::CritFocus).
    pub focused_crit_chance: f64,
    /// Chance for each strike of a multi-hit attack to connect.
    pub multi_hit_chance: f64,
    /// Scale applied to the raw damage of each multi-hit strike.
    pub multi_hit_scale: f64,
    /// Chance for a legacy burn/stun/slow flag to take hold.
    pub legacy_effect_chance: f64,
    /// Chance for the legacy boss burn to wear off after ticking.
    pub legacy_burn_clear_chance: f64,
    /// Turns an inflicted status effect lasts.
    pub status_duration: u32,
    /// Chance for the boss to regenerate on every third turn when no heavy attack is ready.
    pub boss_regen_chance: f64,
    /// Fraction of boss max health restored by that regeneration.
    pub boss_regen_fraction: f64,
    pub base_battle_xp: u32,
    /// Experience granted for losing a battle.
    pub defeat_xp: u32,
    pub defeat_gold_base: u32,
    pub defeat_gold_per_level: u32,
    pub max_level: u32,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_BASE_CRIT_CHANCE: f64 = 15.0;
    pub const DEFAULT_FOCUSED_CRIT_CHANCE: f64 = 40.0;
    pub const DEFAULT_MULTI_HIT_CHANCE: f64 = 80.0;
    pub const DEFAULT_MULTI_HIT_SCALE: f64 = 0.8;
    pub const DEFAULT_LEGACY_EFFECT_CHANCE: f64 = 40.0;
    pub const DEFAULT_LEGACY_BURN_CLEAR_CHANCE: f64 = 30.0;
    pub const DEFAULT_STATUS_DURATION: u32 = 3;
    pub const DEFAULT_BOSS_REGEN_CHANCE: f64 = 50.0;
    pub const DEFAULT_BOSS_REGEN_FRACTION: f64 = 0.05;
    pub const DEFAULT_BASE_BATTLE_XP: u32 = 25;
    pub const DEFAULT_DEFEAT_XP: u32 = 10;
    pub const DEFAULT_DEFEAT_GOLD_BASE: u32 = 10;
    pub const DEFAULT_DEFEAT_GOLD_PER_LEVEL: u32 = 2;
    pub const DEFAULT_MAX_LEVEL: u32 = 20;

    pub fn new() -> Self {
        Self {
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            base_crit_chance: Self::DEFAULT_BASE_CRIT_CHANCE,
            focused_crit_chance: Self::DEFAULT_FOCUSED_CRIT_CHANCE,
            multi_hit_chance: Self::DEFAULT_MULTI_HIT_CHANCE,
            multi_hit_scale: Self::DEFAULT_MULTI_HIT_SCALE,
            legacy_effect_chance: Self::DEFAULT_LEGACY_EFFECT_CHANCE,
            legacy_burn_clear_chance: Self::DEFAULT_LEGACY_BURN_CLEAR_CHANCE,
            status_duration: Self::DEFAULT_STATUS_DURATION,
            boss_regen_chance: Self::DEFAULT_BOSS_REGEN_CHANCE,
            boss_regen_fraction: Self::DEFAULT_BOSS_REGEN_FRACTION,
            base_battle_xp: Self::DEFAULT_BASE_BATTLE_XP,
            defeat_xp: Self::DEFAULT_DEFEAT_XP,
            defeat_gold_base: Self::DEFAULT_DEFEAT_GOLD_BASE,
            defeat_gold_per_level: Self::DEFAULT_DEFEAT_GOLD_PER_LEVEL,
            max_level: Self::DEFAULT_MAX_LEVEL,
        }
    }

    /// Crit chance for an attack, depending on whether it focuses crits.
    pub fn crit_chance(&self, focused: bool) -> f64 {
        if focused {
            self.focused_crit_chance
        } else {
            self.base_crit_chance
        }
    }

    /// Consolation gold for a defeat at `level`.
    pub fn defeat_gold(&self, level: u32) -> u32 {
        self.defeat_gold_base + self.defeat_gold_per_level * level
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
