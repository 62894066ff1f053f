//! Content factory for loading a battle session from data files.

use std::path::{Path, PathBuf};

use battle_core::BattleConfig;

use crate::loaders::{
    ConfigLoader, HeroClass, HeroClassLoader, ItemCatalog, ItemLoader, LoadResult, MonsterLoader,
    MonsterRoster,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── heroes.ron
/// ├── items.ron
/// └── monsters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle rules from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load hero classes from `heroes.ron`.
    pub fn load_hero_classes(&self) -> LoadResult<Vec<HeroClass>> {
        HeroClassLoader::load(&self.data_dir.join("heroes.ron"))
    }

    /// Load the monster roster from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<MonsterRoster> {
        MonsterLoader::load(&self.data_dir.join("monsters.ron"))
    }

    /// Load the equipment catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
