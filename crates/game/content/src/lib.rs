//! Data-driven battle content and loaders.
//!
//! This crate provides loaders for the RON/TOML data files a battle session
//! is built from:
//! - Battle rules (TOML)
//! - Hero classes with their starting kit and abilities (RON)
//! - Monster roster with slay-count progression (RON)
//! - Equipment catalog (RON)
//!
//! All loaders deserialize battle-core types directly through its `serde`
//! feature.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, HeroClass, HeroClassLoader, ItemCatalog, ItemLoader,
    LoadResult, MonsterLoader, MonsterRoster, MonsterTemplate,
};
