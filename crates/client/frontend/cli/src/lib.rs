//! Terminal UI frontend for the battle engine.
//!
//! The frontend owns the hero, the battle log, and the monster roster for a
//! session. It lends the hero and log to a [`battle_core::BattleManager`],
//! feeds it key presses, and renders the [`battle_core::ButtonPanel`] the
//! manager keeps in sync.

mod app;
mod config;
mod controller;
mod input;
pub mod logging;
pub mod presentation;

pub use app::BattleApp;
pub use config::{CliConfig, UiConfig};
pub use controller::{Controller, SessionEnd, Step};
pub use input::{KeyAction, map_key};
