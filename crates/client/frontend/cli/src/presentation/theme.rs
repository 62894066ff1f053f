//! Ratatui styling for the battle screen.

use battle_core::ButtonFlags;
use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct BattleTheme;

impl BattleTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn style_health(&self, current: u32, maximum: u32) -> Style {
        if maximum == 0 {
            return Style::default().fg(Color::Gray);
        }

        let percent = (current * 100) / maximum;
        let color = match percent {
            75.. => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    pub fn style_energy(&self, current: u32, maximum: u32) -> Style {
        if maximum == 0 {
            return Style::default().fg(Color::Gray);
        }

        let percent = (current * 100) / maximum;
        let color = match percent {
            75.. => Color::Cyan,
            50..=74 => Color::Blue,
            25..=49 => Color::LightBlue,
            _ => Color::DarkGray,
        };

        Style::default().fg(color)
    }

    /// Enabled buttons are bright, locked ones dimmed.
    pub fn style_button(&self, flags: ButtonFlags) -> Style {
        if flags.is_enabled() {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        }
    }

    pub fn style_key_hint(&self, flags: ButtonFlags) -> Style {
        if flags.is_enabled() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    /// The newest log line stands out from the history.
    pub fn style_log_line(&self, is_newest: bool) -> Style {
        if is_newest {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn style_title(&self, color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
