//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each area is rendered by a separate submodule for clarity.

mod clock;
mod colors;
mod header;
mod help;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

use clock::draw_clock_card;
use header::draw_header;
use help::draw_help_overlay;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - dispatches to the area renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    // Draw the header
    draw_header(frame, chunks[0], app);

    // Draw the clock card
    draw_clock_card(frame, chunks[1], app);

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[2], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[3], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}
