//! Clock configuration.
//!
//! All options are optional on the command line and have the defaults listed
//! in the README; the resolved values drive the formatter and the scheduler.

use std::fmt;
use std::str::FromStr;

/// Verbosity of the date portion of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Weekday, day, month name and year
    Full,
    /// Day, month name and year
    Long,
    /// Day, abbreviated month and year
    Medium,
    /// Numeric date
    Short,
}

impl DateStyle {
    /// Returns the next style in cycling order (used by the `d` key).
    pub fn next(self) -> Self {
        match self {
            DateStyle::Full => DateStyle::Long,
            DateStyle::Long => DateStyle::Medium,
            DateStyle::Medium => DateStyle::Short,
            DateStyle::Short => DateStyle::Full,
        }
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(DateStyle::Full),
            "long" => Ok(DateStyle::Long),
            "medium" => Ok(DateStyle::Medium),
            "short" => Ok(DateStyle::Short),
            other => Err(format!(
                "Invalid date style '{other}' (expected full, long, medium or short)"
            )),
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateStyle::Full => "full",
            DateStyle::Long => "long",
            DateStyle::Medium => "medium",
            DateStyle::Short => "short",
        };
        write!(f, "{name}")
    }
}

/// Verbosity of the time portion of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    /// Hours and minutes
    Short,
    /// Hours and minutes (seconds when enabled)
    Medium,
    /// Adds the timezone abbreviation
    Long,
    /// Adds the timezone abbreviation and UTC offset
    Full,
}

impl TimeStyle {
    /// Returns the next style in cycling order (used by the `t` key).
    pub fn next(self) -> Self {
        match self {
            TimeStyle::Short => TimeStyle::Medium,
            TimeStyle::Medium => TimeStyle::Long,
            TimeStyle::Long => TimeStyle::Full,
            TimeStyle::Full => TimeStyle::Short,
        }
    }
}

impl FromStr for TimeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(TimeStyle::Short),
            "medium" => Ok(TimeStyle::Medium),
            "long" => Ok(TimeStyle::Long),
            "full" => Ok(TimeStyle::Full),
            other => Err(format!(
                "Invalid time style '{other}' (expected short, medium, long or full)"
            )),
        }
    }
}

impl fmt::Display for TimeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeStyle::Short => "short",
            TimeStyle::Medium => "medium",
            TimeStyle::Long => "long",
            TimeStyle::Full => "full",
        };
        write!(f, "{name}")
    }
}

/// Which portions of the instant the clock displays.
///
/// The date-only variant updates at local midnight instead of every
/// minute/second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Date and time
    DateTime,
    /// Time only
    Time,
    /// Date only, refreshed at midnight
    Date,
}

impl DisplayMode {
    /// Returns the next mode in cycling order (used by the `m` key).
    pub fn next(self) -> Self {
        match self {
            DisplayMode::DateTime => DisplayMode::Time,
            DisplayMode::Time => DisplayMode::Date,
            DisplayMode::Date => DisplayMode::DateTime,
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "datetime" => Ok(DisplayMode::DateTime),
            "time" => Ok(DisplayMode::Time),
            "date" => Ok(DisplayMode::Date),
            other => Err(format!(
                "Invalid mode '{other}' (expected datetime, time or date)"
            )),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayMode::DateTime => "datetime",
            DisplayMode::Time => "time",
            DisplayMode::Date => "date",
        };
        write!(f, "{name}")
    }
}

/// Full clock configuration.
///
/// `locale`/`time_zone`/style/mode changes rebuild the formatter;
/// `show_seconds`/`pause_when_hidden`/mode changes rebuild the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Formatting locale (BCP 47, e.g. "fr-FR"); environment default if unset
    pub locale: Option<String>,
    /// IANA timezone (e.g. "Europe/Paris"); environment default if unset
    pub time_zone: Option<String>,
    /// Date portion verbosity
    pub date_style: DateStyle,
    /// Time portion verbosity
    pub time_style: TimeStyle,
    /// Display seconds and tick every second instead of every minute
    pub show_seconds: bool,
    /// Suppress refreshes while the terminal is unfocused
    pub pause_when_hidden: bool,
    /// Refresh immediately when the terminal regains focus
    pub update_on_visibility_change: bool,
    /// Which portions of the instant are displayed
    pub mode: DisplayMode,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            locale: None,
            time_zone: None,
            date_style: DateStyle::Long,
            time_style: TimeStyle::Medium,
            show_seconds: false,
            pause_when_hidden: true,
            update_on_visibility_change: true,
            mode: DisplayMode::DateTime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = ClockConfig::default();

        assert_eq!(config.locale, None);
        assert_eq!(config.time_zone, None);
        assert_eq!(config.date_style, DateStyle::Long);
        assert_eq!(config.time_style, TimeStyle::Medium);
        assert!(!config.show_seconds);
        assert!(config.pause_when_hidden);
        assert!(config.update_on_visibility_change);
        assert_eq!(config.mode, DisplayMode::DateTime);
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("full".parse::<DateStyle>(), Ok(DateStyle::Full));
        assert_eq!("short".parse::<TimeStyle>(), Ok(TimeStyle::Short));
        assert_eq!("date".parse::<DisplayMode>(), Ok(DisplayMode::Date));

        assert!("FULL".parse::<DateStyle>().is_err());
        assert!("tiny".parse::<TimeStyle>().is_err());
        assert!("clock".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_cycling_visits_every_variant() {
        let mut style = DateStyle::Full;
        for _ in 0..4 {
            style = style.next();
        }
        assert_eq!(style, DateStyle::Full);

        let mut mode = DisplayMode::DateTime;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, DisplayMode::DateTime);
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for style in [
            DateStyle::Full,
            DateStyle::Long,
            DateStyle::Medium,
            DateStyle::Short,
        ] {
            assert_eq!(style.to_string().parse::<DateStyle>(), Ok(style));
        }
    }
}
