//! Button contract between the battle manager and a frontend.
//!
//! The battle manager never inspects widgets. It addresses buttons by
//! [`ButtonId`] and only calls [`Button::lock`], [`Button::unlock`],
//! [`Button::show`], and [`Button::hide`]. Frontends either implement
//! [`ButtonAdapter`] over their own widgets or use [`ButtonPanel`] and read
//! the resulting [`ButtonFlags`] while rendering.

use std::collections::HashMap;

use bitflags::bitflags;

use crate::potion::PotionKind;

/// Fixed hero and post-victory actions on the battle screen.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
pub enum ActionButton {
    Ability,
    Rest,
    Potion,
    Flee,
    Continue,
    Retreat,
}

impl ActionButton {
    /// Actions available while the encounter is live.
    pub const COMBAT: [ActionButton; 4] = [
        ActionButton::Ability,
        ActionButton::Rest,
        ActionButton::Potion,
        ActionButton::Flee,
    ];

    /// Choices offered once the monster is defeated.
    pub const VICTORY: [ActionButton; 2] = [ActionButton::Continue, ActionButton::Retreat];
}

/// Key of a single button on the battle screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Action(ActionButton),
    /// Entry in the potion submenu.
    Potion(PotionKind),
    /// Entry in the ability submenu, by index into the hero's ability set.
    AbilitySlot(usize),
}

impl From<ActionButton> for ButtonId {
    fn from(action: ActionButton) -> Self {
        ButtonId::Action(action)
    }
}

impl From<PotionKind> for ButtonId {
    fn from(kind: PotionKind) -> Self {
        ButtonId::Potion(kind)
    }
}

/// The four operations the battle manager may perform on a button.
pub trait Button {
    fn lock(&mut self);
    fn unlock(&mut self);
    fn show(&mut self);
    fn hide(&mut self);
}

/// Resolves button handles by id. Implementations create missing entries on
/// demand so ability slots need no registration.
pub trait ButtonAdapter {
    type Button: Button;

    fn button(&mut self, id: ButtonId) -> &mut Self::Button;
}

bitflags! {
    /// Lock and visibility state of one button.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ButtonFlags: u8 {
        const LOCKED  = 1 << 0;
        const VISIBLE = 1 << 1;
    }
}

impl ButtonFlags {
    pub fn is_enabled(self) -> bool {
        self.contains(Self::VISIBLE) && !self.contains(Self::LOCKED)
    }
}

impl Button for ButtonFlags {
    fn lock(&mut self) {
        self.insert(Self::LOCKED);
    }

    fn unlock(&mut self) {
        self.remove(Self::LOCKED);
    }

    fn show(&mut self) {
        self.insert(Self::VISIBLE);
    }

    fn hide(&mut self) {
        self.remove(Self::VISIBLE);
    }
}

/// In-memory button registry keyed by [`ButtonId`].
///
/// Unknown buttons start hidden and unlocked.
#[derive(Clone, Debug, Default)]
pub struct ButtonPanel {
    buttons: HashMap<ButtonId, ButtonFlags>,
}

impl ButtonPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self, id: impl Into<ButtonId>) -> ButtonFlags {
        self.buttons.get(&id.into()).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, id: impl Into<ButtonId>) -> bool {
        self.flags(id).contains(ButtonFlags::VISIBLE)
    }

    pub fn is_locked(&self, id: impl Into<ButtonId>) -> bool {
        self.flags(id).contains(ButtonFlags::LOCKED)
    }

    pub fn is_enabled(&self, id: impl Into<ButtonId>) -> bool {
        self.flags(id).is_enabled()
    }
}

impl ButtonAdapter for ButtonPanel {
    type Button = ButtonFlags;

    fn button(&mut self, id: ButtonId) -> &mut ButtonFlags {
        self.buttons.entry(id).or_default()
    }
}
