//! Rejection taxonomy for hero actions.
//!
//! Nothing in a battle is fatal. A hero action is either fully applied or
//! rejected before any mutation, for one of two reasons:
//!
//! - [`IgnoreReason`]: illegal timing (wrong turn, wrong menu, no monster).
//!   The input is dropped silently and the battle log is untouched.
//! - [`Refusal`]: the action was legal but the hero lacks a resource
//!   (cooldown, energy, potions). The refusal's `Display` text is appended
//!   to the battle log so the player sees why nothing happened.

use crate::potion::PotionKind;

/// Why a hero action was dropped without any feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    /// The monster is taking its turn.
    NotHeroTurn,
    /// The action's submenu is not open (or a different one is).
    WrongMenu,
    /// No encounter is in progress or the monster is already dead.
    NoLivingMonster,
    /// The encounter has ended in victory; only post-battle choices apply.
    BattleOver,
}

/// Why a legal hero action could not be afforded. Logged verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Refusal {
    #[error("{hero} doesn't know {ability}!")]
    UnknownAbility { hero: String, ability: String },

    #[error("{ability} is still on cooldown!")]
    OnCooldown { ability: String },

    #[error("Not enough energy to use {ability}!")]
    InsufficientEnergy { ability: String },

    #[error("You don't have any {potion}s left!")]
    OutOfPotion { potion: PotionKind },
}

impl Refusal {
    /// Static identifier for logging and tests.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownAbility { .. } => "unknown_ability",
            Self::OnCooldown { .. } => "on_cooldown",
            Self::InsufficientEnergy { .. } => "insufficient_energy",
            Self::OutOfPotion { .. } => "out_of_potion",
        }
    }
}
