//! Content loaders for reading battle data from files.
//!
//! Each loader converts one RON/TOML file into battle-core types or the
//! templates that spawn them.

pub mod config;
pub mod factory;
pub mod heroes;
pub mod items;
pub mod monsters;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use heroes::{HeroClass, HeroClassLoader};
pub use items::{ItemCatalog, ItemLoader};
pub use monsters::{MonsterLoader, MonsterRoster, MonsterTemplate};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
