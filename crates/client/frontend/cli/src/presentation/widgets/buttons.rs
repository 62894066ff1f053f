//! Action bar and submenu widgets, drawn from the button panel.
//!
//! Hidden buttons are not drawn at all; locked ones are drawn dimmed.

use battle_core::{ActionButton, BattleState, ButtonId, ButtonPanel, Hero, PotionKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::BattleTheme;

fn key_hint(action: ActionButton) -> char {
    match action {
        ActionButton::Ability => 'a',
        ActionButton::Rest => 'r',
        ActionButton::Potion => 'p',
        ActionButton::Flee => 'f',
        ActionButton::Continue => 'c',
        ActionButton::Retreat => 'x',
    }
}

pub fn render_actions(frame: &mut Frame, area: Rect, buttons: &ButtonPanel, theme: &BattleTheme) {
    let mut spans = Vec::new();
    for action in ActionButton::iter() {
        let flags = buttons.flags(action);
        if !buttons.is_visible(action) {
            continue;
        }
        spans.push(Span::styled(
            format!("[{}] ", key_hint(action)),
            theme.style_key_hint(flags),
        ));
        spans.push(Span::styled(action.to_string(), theme.style_button(flags)));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled("[q] Quit", Style::default().fg(Color::Gray)));

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Actions"));

    frame.render_widget(paragraph, area);
}

/// Lists the entries of the open submenu with their number keys.
pub fn render_submenu(
    frame: &mut Frame,
    area: Rect,
    hero: &Hero,
    state: BattleState,
    buttons: &ButtonPanel,
    theme: &BattleTheme,
) {
    let entries: Vec<(ButtonId, String)> = match state {
        BattleState::UseAbility => hero
            .abilities
            .iter()
            .enumerate()
            .map(|(slot, ability)| {
                let cooldown = if ability.can_use() {
                    String::new()
                } else {
                    format!(", cooldown {}", ability.current_cooldown)
                };
                (
                    ButtonId::AbilitySlot(slot),
                    format!("{} ({} energy{})", ability.name, ability.energy_cost, cooldown),
                )
            })
            .collect(),
        BattleState::UseItem => PotionKind::iter()
            .map(|kind| {
                (
                    ButtonId::Potion(kind),
                    format!("{} x{}", kind, hero.potions.count(kind)),
                )
            })
            .collect(),
        _ => Vec::new(),
    };

    let title = match state {
        BattleState::UseAbility => " Abilities ",
        BattleState::UseItem => " Potions ",
        _ => "",
    };

    let lines: Vec<Line> = entries
        .into_iter()
        .enumerate()
        .filter(|(_, (id, _))| buttons.is_visible(*id))
        .map(|(index, (id, text))| {
            let flags = buttons.flags(id);
            Line::from(vec![
                Span::styled(format!("  {}. ", index + 1), theme.style_key_hint(flags)),
                Span::styled(text, theme.style_button(flags)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}
