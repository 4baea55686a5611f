//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

/// Hardcoded fallback locale when neither an explicit value nor an
/// environment preference is available.
pub const DEFAULT_LOCALE: &str = "fr-FR";

/// Hardcoded fallback timezone when neither an explicit value nor an
/// environment preference is available.
pub const DEFAULT_TIME_ZONE: &str = "Europe/Paris";

/// Tick period when seconds are displayed.
pub const SECOND_INTERVAL_MS: i64 = 1_000;

/// Tick period when only minutes are displayed.
pub const MINUTE_INTERVAL_MS: i64 = 60_000;

/// Tick period for the date-only display (one day).
pub const DAY_INTERVAL_MS: i64 = 24 * 60 * 60 * 1_000;

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art and info panel.
    pub const HEADER_HEIGHT: u16 = 6;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 65;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 75;
    /// Clock card width percentage.
    pub const CLOCK_CARD_WIDTH: u16 = 60;
    /// Clock card height percentage.
    pub const CLOCK_CARD_HEIGHT: u16 = 40;
}
