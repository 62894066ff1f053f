//! Battle screen composition.
//!
//! This module provides the main render entry point that lays out all
//! widgets for one frame.
use anyhow::Result;
use battle_core::{BattleManager, ButtonPanel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::presentation::{terminal::Tui, theme::BattleTheme, widgets};

/// Everything a frame needs, borrowed for the duration of one draw.
pub struct RenderContext<'a> {
    pub manager: &'a BattleManager<'a>,
    pub buttons: &'a ButtonPanel,
    pub log_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = BattleTheme::new();
    terminal.draw(|frame| render_battle(frame, ctx, &theme))?;
    Ok(())
}

/// Header, combatants, submenu, action bar, then the battle log.
fn render_battle(frame: &mut Frame, ctx: &RenderContext, theme: &BattleTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(8),                       // Combatants
            Constraint::Length(6),                    // Submenu
            Constraint::Length(3),                    // Action bar
            Constraint::Length(ctx.log_panel_height), // Battle log
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.manager, theme);

    let combatants = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    widgets::combatants::render_hero(frame, combatants[0], ctx.manager.hero(), theme);
    widgets::combatants::render_monster(frame, combatants[1], ctx.manager.monster(), theme);

    widgets::buttons::render_submenu(
        frame,
        chunks[2],
        ctx.manager.hero(),
        ctx.manager.state(),
        ctx.buttons,
        theme,
    );
    widgets::buttons::render_actions(frame, chunks[3], ctx.buttons, theme);

    widgets::log::render(frame, chunks[4], ctx.manager.log(), theme);
}
