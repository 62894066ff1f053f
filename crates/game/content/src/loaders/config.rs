//! Battle rules loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rules from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<BattleConfig, toml::de::Error> {
        toml::from_str(content)
    }
}
