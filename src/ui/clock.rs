//! Clock card rendering.
//!
//! The card shows the formatted instant, a machine-readable timestamp line,
//! and the resolved locale and timezone as both the card title and a
//! context line.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::clock::config::DisplayMode;
use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws the clock card centered in the content area.
pub fn draw_clock_card(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(dialog::CLOCK_CARD_WIDTH, dialog::CLOCK_CARD_HEIGHT, area);

    let context = app.clock.context();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                format!("{} • {}", context.locale, context.time_zone),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1));

    let label = match app.config.mode {
        DisplayMode::DateTime | DisplayMode::Time => "HEURE LOCALE",
        DisplayMode::Date => "DATE LOCALE",
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(label, Style::default().fg(colors::MUTED))),
        Line::from(""),
        Line::from(Span::styled(
            app.clock.formatted(),
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("⧖ ", Style::default().fg(colors::ACCENT)),
            Span::styled(app.clock.timestamp(), Style::default().fg(colors::MUTED)),
        ]),
        Line::from(Span::styled(
            format!("{} • {}", context.locale, context.time_zone),
            Style::default().fg(colors::MUTED),
        )),
    ];

    if app.clock.is_fallback() {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "⚠ invalid locale or timezone, using fr-FR • Europe/Paris",
            Style::default().fg(colors::WARNING),
        )));
    }

    if app.clock.is_paused() {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "◈ refreshes paused while the terminal is unfocused",
            Style::default().fg(colors::WARNING),
        )));
    }

    let clock_widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(clock_widget, card);
}
