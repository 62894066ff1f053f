//! Equipment catalog loader.

use std::path::Path;

use battle_core::{Armor, Item, Weapon};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

impl ItemCatalog {
    /// Looks up an item by display name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.items.iter().find_map(|item| match item {
            Item::Weapon(weapon) if weapon.name == name => Some(weapon),
            _ => None,
        })
    }

    pub fn armor(&self, name: &str) -> Option<&Armor> {
        self.items.iter().find_map(|item| match item {
            Item::Armor(armor) if armor.name == name => Some(armor),
            _ => None,
        })
    }
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<ItemCatalog, ron::error::SpannedError> {
        ron::from_str(content)
    }
}
