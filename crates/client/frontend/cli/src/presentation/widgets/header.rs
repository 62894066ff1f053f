//! Header widget displaying the turn and menu state.

use battle_core::{BattleManager, BattleState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::BattleTheme;

pub fn render(frame: &mut Frame, area: Rect, manager: &BattleManager<'_>, theme: &BattleTheme) {
    let mode_text = match manager.state() {
        BattleState::Home => "",
        BattleState::UseAbility => " [ABILITIES]",
        BattleState::UseItem => " [POTIONS]",
        BattleState::RunAway => " [FLED]",
        BattleState::MonsterDefeated => " [VICTORY]",
    };

    let text = vec![Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(manager.turn().to_string(), theme.style_title(Color::Cyan)),
        Span::raw(" | Actions: "),
        Span::styled(
            manager.nonce().to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Slain: "),
        Span::styled(
            manager.hero().monsters_slain.to_string(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::styled(mode_text, theme.style_title(Color::Magenta)),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Battle"));

    frame.render_widget(paragraph, area);
}
