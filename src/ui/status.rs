//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::colors;

/// Draws the commands bar showing available actions.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands(app);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of available commands.
fn get_commands(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.show_help {
        return vec![("Esc", "close help"), ("q", "quit")];
    }
    vec![
        ("m", "mode"),
        ("s", "seconds"),
        ("d", "date style"),
        ("t", "time style"),
        ("p", "pause"),
        ("r", "refresh"),
        ("?", "help"),
        ("q", "quit"),
    ]
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (" Ready".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
