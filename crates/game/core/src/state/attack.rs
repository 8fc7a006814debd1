use super::StatusKind;

/// Damage school of an attack. Carried for presentation; combat math ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AttackType {
    #[default]
    Physical,
    Magical,
    Support,
}

/// Flag-style effects kept from the first generation of attack data.
///
/// Each flag procs independently at
/// [`BattleConfig::legacy_effect_chance`](crate::config::BattleConfig::legacy_effect_chance)
/// and toggles a battle-wide flag rather than adding a [`StatusEffect`](super::StatusEffect).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegacyFlag {
    Burn,
    Stun,
    Slow,
}

/// One secondary effect carried by an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectSpec {
    /// Restores a flat amount of the attacker's health.
    Heal(u32),
    /// Restores `amount + attacker.attack / 20` of the attacker's health.
    SelfHeal(u32),
    /// Sets the player's barrier pool to this amount.
    Barrier(u32),
    /// Marks the player as dodging until the end of the next boss turn.
    Dodge,
    /// Raises the critical hit chance.
    CritFocus,
    /// Splits the attack into this many independent strikes.
    MultiHit(u32),
    Flag(LegacyFlag),
    /// Rolls `chance` percent to attach a status effect to the target.
    InflictStatus {
        kind: StatusKind,
        #[cfg_attr(feature = "serde", serde(default = "Attack::default_status_chance"))]
        chance: u32,
    },
}

/// A named combat action with cooldown and secondary effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: AttackType,
    /// Percent chance to hit, compared against a `[0, 100)` roll.
    #[cfg_attr(feature = "serde", serde(default = "Attack::default_accuracy"))]
    pub accuracy: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
    /// Turns until usable again. Always within `0..=cooldown`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl Attack {
    pub const DEFAULT_ACCURACY: u32 = 95;
    pub const DEFAULT_STATUS_CHANCE: u32 = 40;
    pub const BASIC_STRIKE_ID: &'static str = "basic-attack";

    pub fn new(id: impl Into<String>, name: impl Into<String>, damage: u32, kind: AttackType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            damage,
            kind,
            accuracy: Self::DEFAULT_ACCURACY,
            cooldown: 0,
            current_cooldown: 0,
            effects: Vec::new(),
            description: String::new(),
        }
    }

    /// The fallback attack used when a combatant has nothing else to swing.
    pub fn basic_strike() -> Self {
        Self::new(Self::BASIC_STRIKE_ID, "Basic Strike", 10, AttackType::Physical)
    }

    #[must_use]
    pub fn with_accuracy(mut self, accuracy: u32) -> Self {
        self.accuracy = accuracy.min(100);
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[cfg(feature = "serde")]
    fn default_accuracy() -> u32 {
        Self::DEFAULT_ACCURACY
    }

    #[cfg(feature = "serde")]
    fn default_status_chance() -> u32 {
        Self::DEFAULT_STATUS_CHANCE
    }

    // ===== cooldown bookkeeping =====

    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Puts the attack on its full cooldown.
    pub fn start_cooldown(&mut self) {
        self.current_cooldown = self.cooldown;
    }

    /// One owner turn has passed.
    pub fn tick_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }

    pub fn reset_cooldown(&mut self) {
        self.current_cooldown = 0;
    }

    // ===== effect queries =====

    pub fn heal(&self) -> Option<u32> {
        self.effects.iter().find_map(|effect| match effect {
            EffectSpec::Heal(amount) if *amount > 0 => Some(*amount),
            _ => None,
        })
    }

    pub fn self_heal(&self) -> Option<u32> {
        self.effects.iter().find_map(|effect| match effect {
            EffectSpec::SelfHeal(amount) if *amount > 0 => Some(*amount),
            _ => None,
        })
    }

    pub fn barrier(&self) -> Option<u32> {
        self.effects.iter().find_map(|effect| match effect {
            EffectSpec::Barrier(amount) if *amount > 0 => Some(*amount),
            _ => None,
        })
    }

    /// Strike count for multi-hit attacks. `MultiHit(0)` counts as a single hit.
    pub fn multi_hit(&self) -> Option<u32> {
        self.effects.iter().find_map(|effect| match effect {
            EffectSpec::MultiHit(count) if *count > 0 => Some(*count),
            _ => None,
        })
    }

    pub fn grants_dodge(&self) -> bool {
        self.effects.contains(&EffectSpec::Dodge)
    }

    pub fn has_crit_focus(&self) -> bool {
        self.effects.contains(&EffectSpec::CritFocus)
    }

    pub fn has_flag(&self, flag: LegacyFlag) -> bool {
        self.effects.contains(&EffectSpec::Flag(flag))
    }

    /// True for attacks that can leave the player burning, slowed or afflicted.
    pub fn applies_status(&self) -> bool {
        self.effects.iter().any(|effect| {
            matches!(
                effect,
                EffectSpec::InflictStatus { .. }
                    | EffectSpec::Flag(LegacyFlag::Burn)
                    | EffectSpec::Flag(LegacyFlag::Slow)
            )
        })
    }
}
