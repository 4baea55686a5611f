//! Live clock TUI
//!
//! A terminal user interface displaying a locale-aware, 24-hour live clock.
//! Run with: clocktui [OPTIONS]

mod app;
mod clock;
mod constants;
mod event;
mod ui;

use std::env;
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use tokio::time::{sleep_until, Instant};

use crate::app::App;
use crate::clock::config::ClockConfig;
use crate::clock::resolve::SystemEnvironment;
use crate::event::EventHandler;

/// Parses command line arguments into the initial clock configuration.
///
/// Locale and timezone default to the environment, then to fr-FR and
/// Europe/Paris. All other options have the documented defaults.
fn parse_args() -> ClockConfig {
    let args: Vec<String> = env::args().collect();
    let mut config = ClockConfig::default();

    // Simple argument parsing using iterator
    let mut args_iter = args.iter().skip(1); // Skip program name

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-l" | "--locale" => {
                if let Some(locale) = args_iter.next() {
                    config.locale = Some(locale.clone());
                } else {
                    eprintln!("Error: --locale requires a LOCALE argument");
                    std::process::exit(1);
                }
            }
            "-z" | "--time-zone" => {
                if let Some(time_zone) = args_iter.next() {
                    config.time_zone = Some(time_zone.clone());
                } else {
                    eprintln!("Error: --time-zone requires a TZ argument");
                    std::process::exit(1);
                }
            }
            "--date-style" => match args_iter.next().map(|s| s.parse()) {
                Some(Ok(style)) => config.date_style = style,
                Some(Err(reason)) => {
                    eprintln!("Error: {reason}");
                    std::process::exit(1);
                }
                None => {
                    eprintln!("Error: --date-style requires a STYLE argument");
                    std::process::exit(1);
                }
            },
            "--time-style" => match args_iter.next().map(|s| s.parse()) {
                Some(Ok(style)) => config.time_style = style,
                Some(Err(reason)) => {
                    eprintln!("Error: {reason}");
                    std::process::exit(1);
                }
                None => {
                    eprintln!("Error: --time-style requires a STYLE argument");
                    std::process::exit(1);
                }
            },
            "-m" | "--mode" => match args_iter.next().map(|s| s.parse()) {
                Some(Ok(mode)) => config.mode = mode,
                Some(Err(reason)) => {
                    eprintln!("Error: {reason}");
                    std::process::exit(1);
                }
                None => {
                    eprintln!("Error: --mode requires a MODE argument");
                    std::process::exit(1);
                }
            },
            "-s" | "--seconds" => config.show_seconds = true,
            "--no-pause" => config.pause_when_hidden = false,
            "--no-focus-refresh" => config.update_on_visibility_change = false,
            "-h" | "--help" => {
                println!("clocktui - Terminal live clock");
                println!();
                println!("Usage: clocktui [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -l, --locale <LOCALE>     Formatting locale (BCP 47, e.g. fr-FR)");
                println!("  -z, --time-zone <TZ>      IANA timezone (e.g. Europe/Paris)");
                println!("      --date-style <STYLE>  full, long, medium or short (default: long)");
                println!("      --time-style <STYLE>  short, medium, long or full (default: medium)");
                println!("  -s, --seconds             Show seconds and tick every second");
                println!("  -m, --mode <MODE>         datetime, time or date (default: datetime)");
                println!("      --no-pause            Keep refreshing while the terminal is unfocused");
                println!("      --no-focus-refresh    Do not refresh immediately on regaining focus");
                println!("  -h, --help                Show this help message");
                println!();
                println!("Locale and timezone default to the environment preference,");
                println!("then to fr-FR / Europe/Paris.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    config
}

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    // Logging stays silent unless RUST_LOG is set; warnings would corrupt
    // the TUI surface otherwise
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse command line arguments
    let config = parse_args();
    let pause_when_hidden = config.pause_when_hidden;

    // Initialize the terminal
    let terminal = ratatui::init();

    // Focus tracking is only needed when the pause policy is active
    if pause_when_hidden {
        let _ = execute!(io::stdout(), EnableFocusChange);
    }

    // Create the application
    let app = App::new(config, Box::new(SystemEnvironment), Utc::now());

    // Run the application
    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    if pause_when_hidden {
        let _ = execute!(io::stdout(), DisableFocusChange);
    }
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// Each iteration draws the UI, then waits for whichever comes first: a
/// terminal event (key press, focus change) or the clock's next deadline.
/// Both paths run to completion before the next iteration, so a focus
/// refresh and a scheduled tick can never interleave.
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler
    let mut event_handler = EventHandler::new();

    // Main loop
    loop {
        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        let deadline = app.next_deadline();

        tokio::select! {
            // Handle events (keyboard input, focus changes)
            event = event_handler.next() => {
                if let Some(action) = event? {
                    // Process the event and check if we should quit
                    if app.handle_action(action, Utc::now()) {
                        break;
                    }
                }
            }
            // Wake at the clock's next boundary deadline
            _ = sleep_until_deadline(deadline) => {
                app.on_tick(Utc::now());
            }
        }
    }

    Ok(())
}

/// Sleeps until the given deadline. Pends forever when no deadline is
/// armed (only terminal events can wake the loop then).
async fn sleep_until_deadline(deadline: Option<chrono::DateTime<Utc>>) {
    match deadline {
        Some(deadline) => {
            let delay = (deadline - Utc::now()).to_std().unwrap_or(Duration::ZERO);
            sleep_until(Instant::now() + delay).await;
        }
        None => std::future::pending::<()>().await,
    }
}
