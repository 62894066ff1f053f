//! Deterministic battle rules and data types shared across frontends.
//!
//! `battle-core` defines the combatant model, abilities, potions, and the
//! turn-alternating [`battle::BattleManager`] that drives a frontend through
//! the [`ui::ButtonAdapter`] contract. All battle mutation flows through the
//! manager; content loaders and frontends depend on the types re-exported here.
pub mod ability;
pub mod battle;
pub mod combatant;
pub mod config;
pub mod error;
pub mod potion;
pub mod rng;
pub mod ui;

pub use ability::{Ability, AbilityKind, AbilityRolls, Effect};
pub use battle::{
    ActionOutcome, BattleLog, BattleManager, BattleState, BattleStatus, PostBattleChoice,
    TurnState,
};
pub use combatant::{Armor, Combatant, Health, Hero, Item, Monster, Weapon};
pub use config::BattleConfig;
pub use error::{IgnoreReason, Refusal};
pub use potion::{PotionBag, PotionEffect, PotionKind};
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};
pub use ui::{ActionButton, Button, ButtonAdapter, ButtonFlags, ButtonId, ButtonPanel};
