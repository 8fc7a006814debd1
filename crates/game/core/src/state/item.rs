/// What an item does when used in battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemKind {
    /// Heals by `value`.
    Health,
    /// Permanently raises attack by `value` for the rest of the battle.
    Attack,
    /// Permanently raises defense by `value` for the rest of the battle.
    Defense,
    /// Removes every status effect plus the burning and slowed flags.
    Cleanse,
    Other,
}

/// A consumable or trinket carried into battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: u32,
    #[cfg_attr(feature = "serde", serde(default = "Item::default_one_time_use"))]
    pub one_time_use: bool,
    /// Shop price in gold.
    #[cfg_attr(feature = "serde", serde(default = "Item::default_cost"))]
    pub cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl Item {
    pub const DEFAULT_COST: u32 = 100;

    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind, value: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            value,
            one_time_use: true,
            cost: Self::DEFAULT_COST,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn reusable(mut self) -> Self {
        self.one_time_use = false;
        self
    }

    #[cfg(feature = "serde")]
    fn default_one_time_use() -> bool {
        true
    }

    #[cfg(feature = "serde")]
    fn default_cost() -> u32 {
        Self::DEFAULT_COST
    }
}
