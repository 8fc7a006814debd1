/// Kinds of timed status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatusKind {
    /// Fire damage over time scaled by the inflicting attacker's attack.
    Burn,
    /// Damage over time scaled by the victim's max health.
    Poison,
    /// Lose the next turn.
    Stun,
    Slow,
    Weaken,
}

/// Stat touched by a [`StatModifier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Defense,
    Speed,
}

/// Signed adjustment applied while the owning effect is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: Stat,
    pub delta: i32,
}

/// A timed modifier attached to a combatant.
///
/// Dropped from its owner's list once `duration` reaches 0 after a turn-start
/// tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub duration: u32,
    pub damage_per_turn: Option<u32>,
    pub skip_turn: bool,
    pub modifier: Option<StatModifier>,
    /// Name of the combatant that applied the effect.
    pub source: String,
}

impl StatusEffect {
    pub const SLOW_SPEED_PENALTY: i32 = -5;
    pub const WEAKEN_DEFENSE_PENALTY: i32 = -2;

    /// Builds a fresh effect with the payload for `kind`.
    ///
    /// Burn deals `attacker_attack * 0.2` per turn, poison `target_max_health * 0.05`,
    /// both floored.
    pub fn inflict(
        kind: StatusKind,
        duration: u32,
        attacker_attack: u32,
        target_max_health: u32,
        source: impl Into<String>,
    ) -> Self {
        let mut effect = Self {
            kind,
            duration,
            damage_per_turn: None,
            skip_turn: false,
            modifier: None,
            source: source.into(),
        };
        match kind {
            StatusKind::Burn => effect.damage_per_turn = Some(attacker_attack / 5),
            StatusKind::Poison => effect.damage_per_turn = Some(target_max_health / 20),
            StatusKind::Stun => effect.skip_turn = true,
            StatusKind::Slow => {
                effect.modifier = Some(StatModifier {
                    stat: Stat::Speed,
                    delta: Self::SLOW_SPEED_PENALTY,
                })
            }
            StatusKind::Weaken => {
                effect.modifier = Some(StatModifier {
                    stat: Stat::Defense,
                    delta: Self::WEAKEN_DEFENSE_PENALTY,
                })
            }
        }
        effect
    }

    pub fn is_expired(&self) -> bool {
        self.duration == 0
    }

    /// Sum of this effect's adjustments to `stat`.
    pub fn modifier_for(&self, stat: Stat) -> i32 {
        self.modifier
            .filter(|modifier| modifier.stat == stat)
            .map_or(0, |modifier| modifier.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_follow_kind() {
        let burn = StatusEffect::inflict(StatusKind::Burn, 3, 24, 500, "Dragon");
        assert_eq!(burn.damage_per_turn, Some(4));

        let poison = StatusEffect::inflict(StatusKind::Poison, 3, 24, 150, "Vex");
        assert_eq!(poison.damage_per_turn, Some(7));

        let stun = StatusEffect::inflict(StatusKind::Stun, 3, 24, 150, "Golem");
        assert!(stun.skip_turn);
        assert_eq!(stun.damage_per_turn, None);

        let slow = StatusEffect::inflict(StatusKind::Slow, 3, 24, 150, "Shade");
        assert_eq!(slow.modifier_for(Stat::Speed), -5);
        assert_eq!(slow.modifier_for(Stat::Defense), 0);

        let weaken = StatusEffect::inflict(StatusKind::Weaken, 3, 24, 150, "Shade");
        assert_eq!(weaken.modifier_for(Stat::Defense), -2);
    }

    #[test]
    fn kind_displays_lowercase() {
        assert_eq!(StatusKind::Poison.to_string(), "poison");
        assert_eq!("weaken".parse::<StatusKind>(), Ok(StatusKind::Weaken));
    }
}
