use super::{Attack, Stat, StatusEffect};

/// Class resource carried by some heroes. Combat math ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClassTrait {
    HolyPower(u32),
    Range(u32),
}

/// A hero or boss taking part in a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: String,
    pub name: String,
    pub max_health: u32,
    /// Always within `0..=max_health`.
    pub current_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub level: u32,
    pub attacks: Vec<Attack>,
    pub status_effects: Vec<StatusEffect>,
    pub class_trait: Option<ClassTrait>,
}

impl Combatant {
    /// Creates a combatant at full health with no attacks.
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_health: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            id: id.into(),
            name: name.into(),
            max_health,
            current_health: max_health,
            attack: 0,
            defense: 0,
            speed: 0,
            level: 1,
            attacks: Vec::new(),
            status_effects: Vec::new(),
            class_trait: None,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, attack: u32, defense: u32, speed: u32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    #[must_use]
    pub fn with_attacks(mut self, attacks: Vec<Attack>) -> Self {
        self.attacks = attacks;
        self
    }

    #[must_use]
    pub fn with_class_trait(mut self, class_trait: ClassTrait) -> Self {
        self.class_trait = Some(class_trait);
        self
    }

    fn modified(&self, base: u32, stat: Stat) -> u32 {
        let delta: i64 = self
            .status_effects
            .iter()
            .map(|effect| i64::from(effect.modifier_for(stat)))
            .sum();
        (i64::from(base) + delta).clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Defense after active status modifiers, floored at 0.
    pub fn effective_defense(&self) -> u32 {
        self.modified(self.defense, Stat::Defense)
    }

    /// Speed after active status modifiers, floored at 0.
    pub fn effective_speed(&self) -> u32 {
        self.modified(self.speed, Stat::Speed)
    }

    /// Removes up to `amount` health and returns how much was actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_health);
        self.current_health -= lost;
        lost
    }

    /// Restores up to `amount` health and returns how much was actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_health.saturating_sub(self.current_health));
        self.current_health += gained;
        gained
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }

    pub fn health_fraction(&self) -> f64 {
        f64::from(self.current_health) / f64::from(self.max_health)
    }

    pub fn tick_cooldowns(&mut self) {
        self.attacks.iter_mut().for_each(Attack::tick_cooldown);
    }

    pub fn reset_cooldowns(&mut self) {
        self.attacks.iter_mut().for_each(Attack::reset_cooldown);
    }

    /// Attacks off cooldown, with their slot index.
    pub fn ready_attacks(&self) -> impl Iterator<Item = (usize, &Attack)> {
        self.attacks
            .iter()
            .enumerate()
            .filter(|(_, attack)| attack.is_ready())
    }

    pub fn has_skip_turn_effect(&self) -> bool {
        self.status_effects.iter().any(|effect| effect.skip_turn)
    }
}

/// A boss-only permanent stat change triggered by dropping to a health threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phase {
    /// Fraction of max health at or below which the phase starts.
    pub health_threshold: f64,
    pub attack_multiplier: f64,
    pub defense_multiplier: f64,
}

impl Phase {
    /// Finite threshold and finite, positive multipliers.
    pub fn is_well_formed(&self) -> bool {
        self.health_threshold.is_finite()
            && self.attack_multiplier.is_finite()
            && self.defense_multiplier.is_finite()
            && self.attack_multiplier > 0.0
            && self.defense_multiplier > 0.0
    }
}

/// Enemy rank. Bosses grant double experience.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EnemyTier {
    Normal,
    Elite,
    #[default]
    Boss,
}

impl EnemyTier {
    pub const fn xp_multiplier(self) -> f64 {
        match self {
            Self::Boss => 2.0,
            Self::Normal | Self::Elite => 1.0,
        }
    }
}

/// The AI-controlled opponent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boss {
    pub unit: Combatant,
    /// Ordered phases. Phase index `n` refers to `phases[n - 1]`; 0 is the base form.
    pub phases: Vec<Phase>,
    pub current_phase: usize,
    pub gold_reward: u32,
    /// Carried from the template; selection does not use it.
    pub attack_chance: f64,
    pub tier: EnemyTier,
    /// Enemy ids unlocked when this boss is defeated.
    pub unlocks: Vec<String>,
}

impl Boss {
    pub const DEFAULT_GOLD_REWARD: u32 = 50;
    pub const DEFAULT_ATTACK_CHANCE: f64 = 0.7;

    pub fn new(unit: Combatant) -> Self {
        Self {
            unit,
            phases: Vec::new(),
            current_phase: 0,
            gold_reward: Self::DEFAULT_GOLD_REWARD,
            attack_chance: Self::DEFAULT_ATTACK_CHANCE,
            tier: EnemyTier::Boss,
            unlocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_phases(mut self, phases: Vec<Phase>) -> Self {
        self.phases = phases;
        self
    }

    #[must_use]
    pub fn with_gold_reward(mut self, gold_reward: u32) -> Self {
        self.gold_reward = gold_reward;
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: EnemyTier) -> Self {
        self.tier = tier;
        self
    }

    /// Phase for a 1-based index, `None` for the base form or out of range.
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        index.checked_sub(1).and_then(|slot| self.phases.get(slot))
    }
}
