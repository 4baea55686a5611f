//! Application state and logic.
//!
//! This module contains the application state around the clock: the active
//! configuration, the help overlay, status messages, and the mapping from
//! user actions to configuration changes. Configuration toggles go through
//! the same diffing path as any config change, so the right part of the
//! clock (formatter or schedule) is rebuilt.

use chrono::{DateTime, Utc};

use crate::clock::config::ClockConfig;
use crate::clock::resolve::Environment;
use crate::clock::LiveClock;
use crate::event::Action;

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// Active configuration (mirrored into the clock)
    pub config: ClockConfig,
    /// The live clock display unit
    pub clock: LiveClock,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Help overlay visibility
    pub show_help: bool,
    /// Environment source for locale/timezone resolution
    env: Box<dyn Environment>,
}

impl App {
    /// Creates the application and mounts the clock.
    pub fn new(config: ClockConfig, env: Box<dyn Environment>, now: DateTime<Utc>) -> Self {
        let clock = LiveClock::new(config.clone(), env.as_ref(), now);
        let mut app = Self {
            config,
            clock,
            status: None,
            show_help: false,
            env,
        };
        if app.clock.is_fallback() {
            app.set_fallback_status();
        }
        app
    }

    /// Processes an action. Returns true if the application should quit.
    pub fn handle_action(&mut self, action: Action, now: DateTime<Utc>) -> bool {
        match action {
            Action::Quit => {
                self.clock.teardown();
                return true;
            }
            Action::Help => self.show_help = !self.show_help,
            Action::Back => self.show_help = false,
            Action::Refresh => {
                self.clock.refresh(now);
                self.set_status("Refreshed", false);
            }
            Action::ToggleSeconds => {
                let mut config = self.config.clone();
                config.show_seconds = !config.show_seconds;
                let text = if config.show_seconds {
                    "Seconds on, ticking every second"
                } else {
                    "Seconds off, ticking every minute"
                };
                self.set_status(text, false);
                self.apply(config, now);
            }
            Action::TogglePause => {
                let mut config = self.config.clone();
                config.pause_when_hidden = !config.pause_when_hidden;
                let text = if config.pause_when_hidden {
                    "Refreshes pause while the terminal is unfocused"
                } else {
                    "Refreshes continue while unfocused"
                };
                self.set_status(text, false);
                self.apply(config, now);
            }
            Action::ToggleFocusRefresh => {
                let mut config = self.config.clone();
                config.update_on_visibility_change = !config.update_on_visibility_change;
                let text = if config.update_on_visibility_change {
                    "Immediate refresh on focus regain"
                } else {
                    "No refresh on focus regain"
                };
                self.set_status(text, false);
                self.apply(config, now);
            }
            Action::CycleDateStyle => {
                let mut config = self.config.clone();
                config.date_style = config.date_style.next();
                self.set_status(&format!("Date style: {}", config.date_style), false);
                self.apply(config, now);
            }
            Action::CycleTimeStyle => {
                let mut config = self.config.clone();
                config.time_style = config.time_style.next();
                self.set_status(&format!("Time style: {}", config.time_style), false);
                self.apply(config, now);
            }
            Action::CycleMode => {
                let mut config = self.config.clone();
                config.mode = config.mode.next();
                self.set_status(&format!("Mode: {}", config.mode), false);
                self.apply(config, now);
            }
            Action::FocusGained => {
                self.clock.set_visible(true, now);
            }
            Action::FocusLost => {
                self.clock.set_visible(false, now);
            }
        }
        false
    }

    /// Drives the clock's scheduler from the run loop.
    pub fn on_tick(&mut self, now: DateTime<Utc>) {
        self.clock.on_tick(now);
    }

    /// When the run loop should next wake, if at all.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.clock.next_deadline()
    }

    /// Sets the status bar message.
    pub fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    /// Applies a new configuration to the clock.
    fn apply(&mut self, config: ClockConfig, now: DateTime<Utc>) {
        self.clock.apply_config(config.clone(), self.env.as_ref(), now);
        self.config = config;
        if self.clock.is_fallback() {
            self.set_fallback_status();
        }
    }

    fn set_fallback_status(&mut self) {
        self.set_status(
            "Invalid locale or timezone, formatting with fr-FR • Europe/Paris",
            true,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::config::{DisplayMode, TimeStyle};
    use crate::clock::resolve::tests::MockEnvironment;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, h, m, s).unwrap()
    }

    fn paris_app() -> App {
        let config = ClockConfig {
            locale: Some("fr-FR".to_string()),
            time_zone: Some("Europe/Paris".to_string()),
            ..ClockConfig::default()
        };
        App::new(config, Box::new(MockEnvironment::empty()), at(12, 34, 30))
    }

    #[test]
    fn test_quit_tears_the_clock_down() {
        let mut app = paris_app();

        assert!(app.handle_action(Action::Quit, at(12, 34, 31)));
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_toggle_seconds_changes_the_cadence() {
        let mut app = paris_app();
        assert_eq!(app.next_deadline(), Some(at(12, 35, 0)));

        assert!(!app.handle_action(Action::ToggleSeconds, at(12, 34, 30)));

        assert!(app.config.show_seconds);
        assert_eq!(app.next_deadline(), Some(at(12, 34, 31)));
    }

    #[test]
    fn test_cycle_keys_update_the_config() {
        let mut app = paris_app();

        app.handle_action(Action::CycleTimeStyle, at(12, 34, 31));
        assert_eq!(app.config.time_style, TimeStyle::Long);

        app.handle_action(Action::CycleMode, at(12, 34, 32));
        assert_eq!(app.config.mode, DisplayMode::Time);

        assert!(app.status.is_some());
    }

    #[test]
    fn test_focus_actions_route_to_the_clock() {
        let mut app = paris_app();
        app.on_tick(at(12, 35, 0));

        app.handle_action(Action::FocusLost, at(12, 35, 5));
        assert!(app.clock.is_paused());

        app.handle_action(Action::FocusGained, at(12, 35, 40));
        assert_eq!(app.clock.displayed(), at(12, 35, 40));
    }

    #[test]
    fn test_manual_refresh_updates_display_and_status() {
        let mut app = paris_app();

        app.handle_action(Action::Refresh, at(12, 34, 45));

        assert_eq!(app.clock.displayed(), at(12, 34, 45));
        assert_eq!(app.status.as_ref().unwrap().text, "Refreshed");
    }

    #[test]
    fn test_help_overlay_toggles_and_closes() {
        let mut app = paris_app();

        app.handle_action(Action::Help, at(12, 34, 31));
        assert!(app.show_help);

        app.handle_action(Action::Back, at(12, 34, 32));
        assert!(!app.show_help);
    }

    #[test]
    fn test_fallback_surfaces_in_the_status_bar() {
        let config = ClockConfig {
            time_zone: Some("Invalid/Zone".to_string()),
            ..ClockConfig::default()
        };
        let app = App::new(config, Box::new(MockEnvironment::empty()), at(12, 0, 0));

        let status = app.status.expect("fallback should set a status");
        assert!(status.is_error);
    }
}
