//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help_text = get_help_text();

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press Esc to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ]))
                .style(Style::default()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    let key_style = Style::default().fg(colors::KEY).bold();
    let desc_style = Style::default().fg(Color::White);
    let section_style = Style::default().fg(colors::PRIMARY).bold();

    Text::from(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(" DISPLAY", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("m         ", key_style),
            Span::styled("Cycle mode: datetime, time, date", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("d         ", key_style),
            Span::styled("Cycle date style: full, long, medium, short", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("t         ", key_style),
            Span::styled("Cycle time style: short, medium, long, full", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("s         ", key_style),
            Span::styled("Show seconds (ticks every second)", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(" SCHEDULING", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("p         ", key_style),
            Span::styled("Pause refreshes while the terminal is unfocused", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("f         ", key_style),
            Span::styled("Refresh immediately when focus returns", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("r         ", key_style),
            Span::styled("Refresh the display now", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(" GENERAL", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("?  ", key_style),
            Span::styled("or ", Style::default().fg(colors::MUTED)),
            Span::styled("F1    ", key_style),
            Span::styled("Show this help", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("q  ", key_style),
            Span::styled("or ", Style::default().fg(colors::MUTED)),
            Span::styled("Ctrl+C", key_style),
            Span::styled(" Quit application", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(" NOTES", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled(
                "Updates land exactly on minute/second boundaries.",
                Style::default().fg(colors::MUTED),
            ),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled(
                "Date mode refreshes at local midnight.",
                Style::default().fg(colors::MUTED),
            ),
        ]),
        Line::from(""),
    ])
}
