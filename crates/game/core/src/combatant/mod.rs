//! Combatant model: health, the hero, monsters, and equipment.
//!
//! These are plain data holders owned by the surrounding game session. The
//! battle manager borrows the hero and owns the monster of the current
//! encounter; nothing here decides turn order.

mod hero;
mod item;
mod monster;

pub use hero::Hero;
pub use item::{Armor, Item, Weapon};
pub use monster::Monster;

/// Current and maximum health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub const fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Reduces current health, clamped to 0.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Restores health up to max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current - before
    }
}

/// Any entity with health that can attack and be attacked.
pub trait Combatant {
    fn name(&self) -> &str;

    fn health(&self) -> Health;

    fn health_mut(&mut self) -> &mut Health;

    fn is_alive(&self) -> bool {
        !self.health().is_depleted()
    }

    fn take_damage(&mut self, amount: u32) {
        self.health_mut().damage(amount);
    }
}
