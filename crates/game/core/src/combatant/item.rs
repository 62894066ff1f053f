//! Equipment and loot.

use crate::potion::PotionKind;

/// Weapon damage is added to every Strike ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}

/// Armor block is added to every Guard ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    pub name: String,
    pub block: u32,
}

impl Armor {
    pub fn new(name: impl Into<String>, block: u32) -> Self {
        Self {
            name: name.into(),
            block,
        }
    }
}

/// Anything a hero can pick up.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    Weapon(Weapon),
    Armor(Armor),
    Potion(PotionKind),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(weapon) => &weapon.name,
            Item::Armor(armor) => &armor.name,
            Item::Potion(kind) => kind.as_ref(),
        }
    }
}
