use arrayvec::{ArrayVec, CapacityError};

use super::{Armor, Combatant, Health, Item, Weapon};
use crate::ability::Ability;
use crate::config::BattleConfig;
use crate::error::Refusal;
use crate::potion::{PotionBag, PotionEffect, PotionKind};

/// The player's character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub name: String,
    pub class_name: String,
    pub health: Health,
    pub energy: u32,
    pub max_energy: u32,
    pub level: u32,
    pub experience: u32,
    pub gold: u32,
    pub monsters_slain: u32,
    pub potions: PotionBag,
    /// Ordered ability set. Lookups by name return the first match.
    pub abilities: ArrayVec<Ability, { BattleConfig::MAX_ABILITIES }>,
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
    /// Bonus damage for the next damaging ability (Damage Potion).
    pub pending_damage: u32,
    /// Damage blocked from the next monster attack (Block Potion, Guard).
    pub pending_block: u32,
}

impl Hero {
    /// Creates a level 1 hero with full energy, the starter potion kit, and no
    /// abilities or equipment.
    pub fn new(name: impl Into<String>, health: Health, max_energy: u32) -> Self {
        Self {
            name: name.into(),
            class_name: "Hero".to_string(),
            health,
            energy: max_energy,
            max_energy,
            level: 1,
            experience: 0,
            gold: 0,
            monsters_slain: 0,
            potions: PotionBag::default(),
            abilities: ArrayVec::new(),
            weapon: None,
            armor: None,
            pending_damage: 0,
            pending_block: 0,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_potions(mut self, potions: PotionBag) -> Self {
        self.potions = potions;
        self
    }

    /// Adds an ability to the end of the ability set.
    pub fn learn(&mut self, ability: Ability) -> Result<(), CapacityError<Ability>> {
        self.abilities.try_push(ability)
    }

    /// Equips weapons and armor, or stores potions.
    pub fn add_item(&mut self, item: Item) {
        match item {
            Item::Weapon(weapon) => {
                tracing::debug!(hero = %self.name, weapon = %weapon.name, "equipped weapon");
                self.weapon = Some(weapon);
            }
            Item::Armor(armor) => {
                tracing::debug!(hero = %self.name, armor = %armor.name, "equipped armor");
                self.armor = Some(armor);
            }
            Item::Potion(kind) => self.potions.add(kind, 1),
        }
    }

    pub fn weapon_damage(&self) -> u32 {
        self.weapon.as_ref().map_or(0, |weapon| weapon.damage)
    }

    pub fn armor_block(&self) -> u32 {
        self.armor.as_ref().map_or(0, |armor| armor.block)
    }

    /// Finds the first ability with this name.
    pub fn ability(&self, name: &str) -> Option<(usize, &Ability)> {
        self.abilities
            .iter()
            .enumerate()
            .find(|(_, ability)| ability.name == name)
    }

    pub fn has_potions(&self) -> bool {
        self.potions.has_any()
    }

    /// Drinks a potion. An empty slot is refused without mutating the hero.
    pub fn use_potion(
        &mut self,
        kind: PotionKind,
        config: &BattleConfig,
    ) -> Result<PotionEffect, Refusal> {
        if !self.potions.take(kind) {
            return Err(Refusal::OutOfPotion { potion: kind });
        }

        let effect = match kind {
            PotionKind::Health => PotionEffect::Healed(self.health.heal(config.health_potion_heal)),
            PotionKind::Damage => {
                self.pending_damage = config.damage_potion_bonus;
                PotionEffect::DamageArmed(self.pending_damage)
            }
            PotionKind::Block => {
                self.pending_block = config.block_potion_bonus;
                PotionEffect::BlockArmed(self.pending_block)
            }
        };
        Ok(effect)
    }

    /// Restores energy up to the maximum. Returns the amount restored.
    pub fn rest(&mut self, config: &BattleConfig) -> u32 {
        let before = self.energy;
        self.energy = self
            .energy
            .saturating_add(config.rest_energy)
            .min(self.max_energy);
        self.energy - before
    }

    /// Ticks every ability cooldown once.
    pub fn update_abilities(&mut self) {
        for ability in &mut self.abilities {
            ability.tick();
        }
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Adds experience and levels up once the threshold for the current level
    /// is reached. Returns true on level up.
    pub fn gain_experience(&mut self, amount: u32, config: &BattleConfig) -> bool {
        self.experience = self.experience.saturating_add(amount);
        if self.experience < config.experience_per_level.saturating_mul(self.level) {
            return false;
        }

        self.experience = 0;
        self.level_up(config);
        true
    }

    fn level_up(&mut self, config: &BattleConfig) {
        self.health.current = self.health.current.saturating_add(config.level_up_health);
        if self.health.current > self.health.max {
            self.health.max = self.health.current;
        }
        self.level += 1;
        tracing::info!(hero = %self.name, level = self.level, "hero leveled up");
    }
}

impl Combatant for Hero {
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
