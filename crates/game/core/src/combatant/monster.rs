use super::{Combatant, Health};

/// A monster the hero fights.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub name: String,
    pub health: Health,
    /// Flat damage dealt by each attack, before the hero's pending block.
    pub damage: u32,
    /// Experience granted to the hero on defeat.
    pub experience: u32,
    /// Gold granted to the hero on defeat.
    pub gold: u32,
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        health: Health,
        damage: u32,
        experience: u32,
        gold: u32,
    ) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
            experience,
            gold,
        }
    }
}

impl Combatant for Monster {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> Health {
        self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
}
