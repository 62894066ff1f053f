//! Terminal rendering for the battle screen.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use theme::BattleTheme;
pub use ui::{RenderContext, render};
