//! Monster roster loader.

use std::path::Path;

use battle_core::{Health, Monster};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Template a monster is spawned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub health: u32,
    pub damage: u32,
    pub experience: u32,
    pub gold: u32,
    /// Monsters the hero must have slain before this one appears.
    #[serde(default)]
    pub min_slain: u32,
}

impl MonsterTemplate {
    pub fn spawn(&self) -> Monster {
        Monster::new(
            self.name.clone(),
            Health::full(self.health),
            self.damage,
            self.experience,
            self.gold,
        )
    }
}

/// Monster templates ordered by their slay threshold.
#[derive(Debug, Clone, Default)]
pub struct MonsterRoster {
    templates: Vec<MonsterTemplate>,
}

impl MonsterRoster {
    pub fn new(mut templates: Vec<MonsterTemplate>) -> Self {
        templates.sort_by_key(|template| template.min_slain);
        Self { templates }
    }

    /// The strongest monster unlocked at `slain` kills.
    ///
    /// Ties on the threshold go to the template listed last.
    pub fn pick(&self, slain: u32) -> Option<&MonsterTemplate> {
        self.templates
            .iter()
            .rev()
            .find(|template| template.min_slain <= slain)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonsterTemplate> {
        self.templates.iter()
    }
}

/// Loader for the monster roster from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// RON format: `Vec<MonsterTemplate>`.
    pub fn load(path: &Path) -> LoadResult<MonsterRoster> {
        let content = read_file(path)?;
        let templates: Vec<MonsterTemplate> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster roster RON {}: {}", path.display(), e))?;

        if templates.is_empty() {
            anyhow::bail!("Monster roster {} is empty", path.display());
        }
        Ok(MonsterRoster::new(templates))
    }
}
