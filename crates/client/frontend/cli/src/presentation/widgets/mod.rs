//! Battle screen widgets. Each exposes `render` functions drawing into a
//! caller-provided area.

pub mod buttons;
pub mod combatants;
pub mod header;
pub mod log;
