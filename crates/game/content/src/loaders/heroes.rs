//! Hero class loader.
//!
//! A hero class is a template: the health range a new hero rolls from, the
//! starting kit, and the ability set. [`HeroClass::spawn`] turns it into a
//! playable [`Hero`].

use std::path::Path;

use battle_core::{
    Ability, BattleConfig, Health, Hero, Item, PcgRng, PotionBag, PotionKind, RngOracle,
    RollContext, compute_seed,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{ItemCatalog, LoadResult, read_file};

/// Template a hero is spawned from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroClass {
    pub name: String,
    /// Inclusive health range; the rolled value becomes both current and max.
    pub health: (u32, u32),
    pub max_energy: u32,
    #[serde(default = "HeroClass::default_gold")]
    pub gold: u32,
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub armor: Option<String>,
    /// Starting potions. `None` gives the standard kit.
    #[serde(default)]
    pub potions: Option<Vec<(PotionKind, u32)>>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

impl HeroClass {
    const DEFAULT_GOLD: u32 = 50;
    const FALLBACK_HEALTH: u32 = 10;
    const FALLBACK_ENERGY: u32 = 10;

    fn default_gold() -> u32 {
        Self::DEFAULT_GOLD
    }

    /// Plain class used when a requested class is unknown.
    pub fn fallback() -> Self {
        Self {
            name: "Hero".to_string(),
            health: (Self::FALLBACK_HEALTH, Self::FALLBACK_HEALTH),
            max_energy: Self::FALLBACK_ENERGY,
            gold: Self::DEFAULT_GOLD,
            weapon: None,
            armor: None,
            potions: None,
            abilities: Vec::new(),
        }
    }

    /// Finds a class by case-insensitive name, falling back to [`Self::fallback`].
    pub fn select(classes: &[HeroClass], name: &str) -> HeroClass {
        classes
            .iter()
            .find(|class| class.name.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(class = name, "unknown hero class, using fallback");
                Self::fallback()
            })
    }

    /// Builds a hero from this class.
    ///
    /// Health is rolled from `config.seed`, so the same seed always spawns the
    /// same hero. Equipment names must exist in `items`.
    pub fn spawn(
        &self,
        hero_name: impl Into<String>,
        config: &BattleConfig,
        items: &ItemCatalog,
    ) -> LoadResult<Hero> {
        let (min, max) = self.health;
        let max_health =
            PcgRng.range(compute_seed(config.seed, 0, RollContext::Spawn), min, max);

        let potions = match &self.potions {
            Some(pairs) => PotionBag::with_counts(pairs.iter().copied()),
            None => PotionBag::default(),
        };
        let mut hero = Hero::new(hero_name, Health::full(max_health), self.max_energy)
            .with_class(&self.name)
            .with_gold(self.gold)
            .with_potions(potions);

        if let Some(weapon_name) = &self.weapon {
            let weapon = items.weapon(weapon_name).ok_or_else(|| {
                anyhow::anyhow!("Class '{}' references unknown weapon '{}'", self.name, weapon_name)
            })?;
            hero.add_item(Item::Weapon(weapon.clone()));
        }
        if let Some(armor_name) = &self.armor {
            let armor = items.armor(armor_name).ok_or_else(|| {
                anyhow::anyhow!("Class '{}' references unknown armor '{}'", self.name, armor_name)
            })?;
            hero.add_item(Item::Armor(armor.clone()));
        }

        for ability in &self.abilities {
            hero.learn(ability.clone()).map_err(|_| {
                anyhow::anyhow!(
                    "Class '{}' has more than {} abilities",
                    self.name,
                    BattleConfig::MAX_ABILITIES
                )
            })?;
        }

        tracing::info!(
            hero = %hero.name,
            class = %self.name,
            health = max_health,
            "hero spawned"
        );
        Ok(hero)
    }
}

/// Loader for hero classes from RON files.
pub struct HeroClassLoader;

impl HeroClassLoader {
    /// RON format: `Vec<HeroClass>`.
    pub fn load(path: &Path) -> LoadResult<Vec<HeroClass>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hero classes RON {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Vec<HeroClass>, ron::error::SpannedError> {
        ron::from_str(content)
    }
}
