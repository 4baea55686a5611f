//! Event handling module.
//!
//! This module handles keyboard and terminal focus events using crossterm.
//! Events arrive on an async stream so the run loop can wait on input and
//! on the clock's next deadline at the same time.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;

/// Represents the different actions a user or the terminal can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Show help
    Help,
    /// Close the current overlay
    Back,
    /// Refresh the displayed instant immediately
    Refresh,
    /// Toggle the seconds display (and the per-second cadence)
    ToggleSeconds,
    /// Toggle pausing of refreshes while unfocused
    TogglePause,
    /// Toggle the immediate refresh on regaining focus
    ToggleFocusRefresh,
    /// Cycle the date style
    CycleDateStyle,
    /// Cycle the time style
    CycleTimeStyle,
    /// Cycle the display mode (datetime / time / date)
    CycleMode,
    /// The terminal regained focus
    FocusGained,
    /// The terminal lost focus
    FocusLost,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    stream: EventStream,
}

impl EventHandler {
    /// Creates a new event handler over the terminal's event stream.
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }

    /// Waits for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) for events without a mapping (releases, resizes,
    /// unmapped keys). A closed event stream is reported as Quit.
    pub async fn next(&mut self) -> io::Result<Option<Action>> {
        match self.stream.next().await {
            Some(Ok(event)) => Ok(self.event_to_action(&event)),
            Some(Err(e)) => Err(e),
            None => Ok(Some(Action::Quit)),
        }
    }

    /// Converts a terminal event to an application action.
    pub(crate) fn event_to_action(&self, event: &Event) -> Option<Action> {
        match event {
            // Only process key press events (not releases)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.key_to_action(*key),
            Event::FocusGained => Some(Action::FocusGained),
            Event::FocusLost => Some(Action::FocusLost),
            _ => None,
        }
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        // Map keys to actions
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Esc | KeyCode::Char('b') => Some(Action::Back),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('s') => Some(Action::ToggleSeconds),
            KeyCode::Char('p') => Some(Action::TogglePause),
            KeyCode::Char('f') => Some(Action::ToggleFocusRefresh),
            KeyCode::Char('d') => Some(Action::CycleDateStyle),
            KeyCode::Char('t') => Some(Action::CycleTimeStyle),
            KeyCode::Char('m') => Some(Action::CycleMode),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_toggle_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('s'))),
            Some(Action::ToggleSeconds)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('p'))),
            Some(Action::TogglePause)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('f'))),
            Some(Action::ToggleFocusRefresh)
        );
    }

    #[test]
    fn test_style_cycling_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('d'))),
            Some(Action::CycleDateStyle)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('t'))),
            Some(Action::CycleTimeStyle)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('m'))),
            Some(Action::CycleMode)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_refresh_key() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('r'))),
            Some(Action::Refresh)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }

    #[test]
    fn test_focus_events_map_to_visibility_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.event_to_action(&Event::FocusGained),
            Some(Action::FocusGained)
        );
        assert_eq!(
            handler.event_to_action(&Event::FocusLost),
            Some(Action::FocusLost)
        );
    }

    #[test]
    fn test_key_releases_are_ignored() {
        let handler = EventHandler::new();

        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.event_to_action(&Event::Key(release)), None);
    }
}
