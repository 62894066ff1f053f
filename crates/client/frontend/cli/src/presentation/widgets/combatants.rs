//! Hero and monster stat panels.

use battle_core::{Hero, Monster, PotionKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::BattleTheme;

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::White))
}

pub fn render_hero(frame: &mut Frame, area: Rect, hero: &Hero, theme: &BattleTheme) {
    let mut lines = vec![
        Line::from(vec![
            label("Health: "),
            Span::styled(
                format!("{}/{}", hero.health.current, hero.health.max),
                theme.style_health(hero.health.current, hero.health.max),
            ),
        ]),
        Line::from(vec![
            label("Energy: "),
            Span::styled(
                format!("{}/{}", hero.energy, hero.max_energy),
                theme.style_energy(hero.energy, hero.max_energy),
            ),
        ]),
        Line::from(vec![
            label("Level: "),
            Span::raw(format!("{} ({} xp)", hero.level, hero.experience)),
            label("  Gold: "),
            Span::styled(hero.gold.to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ];

    let weapon = hero
        .weapon
        .as_ref()
        .map_or("-".to_string(), |w| format!("{} (+{})", w.name, w.damage));
    let armor = hero
        .armor
        .as_ref()
        .map_or("-".to_string(), |a| format!("{} (+{})", a.name, a.block));
    lines.push(Line::from(vec![label("Weapon: "), Span::raw(weapon)]));
    lines.push(Line::from(vec![label("Armor: "), Span::raw(armor)]));

    let potions = PotionKind::iter()
        .map(|kind| format!("{} x{}", kind, hero.potions.count(kind)))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(Line::from(vec![label("Potions: "), Span::raw(potions)]));

    if hero.pending_damage > 0 || hero.pending_block > 0 {
        lines.push(Line::from(Span::styled(
            format!(
                "Pending: +{} damage, {} block",
                hero.pending_damage, hero.pending_block
            ),
            Style::default().fg(Color::LightMagenta),
        )));
    }

    let title = format!(" {} the {} ", hero.name, hero.class_name);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(title),
    );

    frame.render_widget(paragraph, area);
}

pub fn render_monster(frame: &mut Frame, area: Rect, monster: Option<&Monster>, theme: &BattleTheme) {
    let (title, lines) = match monster {
        Some(monster) => (
            format!(" {} ", monster.name),
            vec![
                Line::from(vec![
                    label("Health: "),
                    Span::styled(
                        format!("{}/{}", monster.health.current, monster.health.max),
                        theme.style_health(monster.health.current, monster.health.max),
                    ),
                ]),
                Line::from(vec![label("Damage: "), Span::raw(monster.damage.to_string())]),
                Line::from(vec![
                    label("Reward: "),
                    Span::raw(format!("{} xp, {} gold", monster.experience, monster.gold)),
                ]),
            ],
        ),
        None => (" Monster ".to_string(), vec![Line::from("No monster in sight.")]),
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(title),
    );

    frame.render_widget(paragraph, area);
}
