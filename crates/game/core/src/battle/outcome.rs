//! Results returned to the caller by battle manager operations.

use super::BattleState;
use crate::error::{IgnoreReason, Refusal};

/// Outcome of a hero action handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The hero's turn was consumed and the monster's turn resolved.
    Resolved,
    /// A submenu was opened or closed; the turn did not change.
    MenuToggled(BattleState),
    /// Legal timing, but the hero lacked a resource. Already logged.
    Refused(Refusal),
    /// Illegal timing. Nothing changed and nothing was logged.
    Ignored(IgnoreReason),
}

impl ActionOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Result of polling [`super::BattleManager::update_battle_state`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum BattleStatus {
    /// Detected this poll; rewards were granted.
    MonsterDefeated,
    HeroDefeated,
    /// The hero fled; the caller ends the encounter.
    Fled,
    Continuing,
}

/// Choice offered after a victory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostBattleChoice {
    /// Fight the next monster.
    Continue,
    /// Leave the battlefield with the spoils.
    Retreat,
}
