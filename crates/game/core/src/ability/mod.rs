//! Hero abilities.
//!
//! An ability is a named, cooldown-gated, energy-costed action. Resolving an
//! ability is a pure function of the ability, the hero's equipment and pending
//! bonuses, and two d100 rolls; the battle manager applies the resulting
//! [`Effect`] afterwards.

mod effect;

pub use effect::Effect;

use crate::combatant::Hero;

/// What an ability does when used.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    /// Damaging attack against the monster.
    Strike {
        power: u32,
        /// Hit chance in percent; a d100 roll above this misses.
        accuracy: u32,
        /// Critical chance in percent; a d100 roll at or below this crits.
        crit_chance: u32,
        crit_multiplier: u32,
    },
    /// Restores the hero's health.
    Mend { amount: u32 },
    /// Blocks damage from the next monster attack.
    Guard { block: u32 },
}

/// The two d100 rolls an ability may consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityRolls {
    pub hit: u32,
    pub critical: u32,
}

impl AbilityRolls {
    /// Rolls that always hit and never crit.
    pub const STEADY: Self = Self {
        hit: 1,
        critical: 100,
    };
}

/// A named special action in a hero's ability set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    pub energy_cost: u32,
    /// Turns the ability stays unavailable after use.
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_cooldown: u32,
    pub kind: AbilityKind,
}

impl Ability {
    pub fn new(name: impl Into<String>, energy_cost: u32, cooldown: u32, kind: AbilityKind) -> Self {
        Self {
            name: name.into(),
            energy_cost,
            cooldown,
            current_cooldown: 0,
            kind,
        }
    }

    pub fn strike(name: impl Into<String>, energy_cost: u32, cooldown: u32, power: u32) -> Self {
        Self::new(
            name,
            energy_cost,
            cooldown,
            AbilityKind::Strike {
                power,
                accuracy: 100,
                crit_chance: 0,
                crit_multiplier: 2,
            },
        )
    }

    pub fn mend(name: impl Into<String>, energy_cost: u32, cooldown: u32, amount: u32) -> Self {
        Self::new(name, energy_cost, cooldown, AbilityKind::Mend { amount })
    }

    pub fn guard(name: impl Into<String>, energy_cost: u32, cooldown: u32, block: u32) -> Self {
        Self::new(name, energy_cost, cooldown, AbilityKind::Guard { block })
    }

    /// Sets the remaining cooldown, e.g. when restoring a hero mid-fight.
    pub fn with_current_cooldown(mut self, current_cooldown: u32) -> Self {
        self.current_cooldown = current_cooldown;
        self
    }

    pub fn can_use(&self) -> bool {
        self.current_cooldown == 0
    }

    pub fn is_affordable(&self, energy: u32) -> bool {
        energy >= self.energy_cost
    }

    /// End-of-turn cooldown tick, floored at zero.
    pub fn tick(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }

    /// Puts the ability on its full cooldown.
    pub fn trigger(&mut self) {
        self.current_cooldown = self.cooldown;
    }

    /// Computes the effect of using this ability. Does not mutate anything.
    pub fn resolve(&self, hero: &Hero, rolls: AbilityRolls) -> Effect {
        match self.kind {
            AbilityKind::Strike {
                power,
                accuracy,
                crit_chance,
                crit_multiplier,
            } => {
                if rolls.hit > accuracy {
                    return Effect::miss();
                }
                let base = power
                    .saturating_add(hero.weapon_damage())
                    .saturating_add(hero.pending_damage);
                if rolls.critical <= crit_chance {
                    Effect::critical(base.saturating_mul(crit_multiplier.max(1)))
                } else {
                    Effect::hit(base)
                }
            }
            AbilityKind::Mend { amount } => Effect::heal(amount),
            AbilityKind::Guard { block } => {
                Effect::guard(block.saturating_add(hero.armor_block()))
            }
        }
    }
}
