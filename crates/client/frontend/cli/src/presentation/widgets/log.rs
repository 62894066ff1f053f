//! Battle log panel, newest line at the bottom.

use battle_core::BattleLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::BattleTheme;

pub fn render(frame: &mut Frame, area: Rect, log: &BattleLog, theme: &BattleTheme) {
    let visible = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = log
        .recent(visible)
        .enumerate()
        .map(|(age, entry)| Line::styled(entry, theme.style_log_line(age == 0)))
        .collect();
    lines.reverse();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Log"))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
