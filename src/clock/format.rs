//! Locale-aware formatting of the displayed instant.
//!
//! A `ClockFormatter` is built once per configuration change and reused on
//! every tick. Construction parses the resolved locale and timezone; if
//! either is invalid the formatter silently substitutes the hardcoded
//! default context (a warning is logged). Formatting itself can also fall
//! back, to a plain locale-independent rendering, so the display always
//! shows something.

use std::fmt::Write as _;

use chrono::{DateTime, Locale, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::clock::config::{ClockConfig, DateStyle, DisplayMode, TimeStyle};
use crate::clock::resolve::ResolvedContext;

/// Formatter bound to a resolved context and style options.
pub struct ClockFormatter {
    locale: Locale,
    time_zone: Tz,
    pattern: String,
    is_fallback: bool,
}

impl ClockFormatter {
    /// Builds a formatter for the given context and options.
    ///
    /// Never fails: on an invalid locale or timezone it logs a warning and
    /// substitutes the hardcoded default context with the same options.
    pub fn new(context: &ResolvedContext, config: &ClockConfig) -> Self {
        match Self::try_build(context, config) {
            Ok(formatter) => formatter,
            Err(reason) => {
                warn!(
                    locale = %context.locale,
                    time_zone = %context.time_zone,
                    %reason,
                    "invalid locale or timezone, falling back to defaults"
                );
                let mut formatter = Self::try_build(&ResolvedContext::fallback(), config)
                    .expect("hardcoded default context is always valid");
                formatter.is_fallback = true;
                formatter
            }
        }
    }

    /// Attempts to build a formatter, failing on unknown locale or timezone.
    fn try_build(context: &ResolvedContext, config: &ClockConfig) -> Result<Self, String> {
        let locale = parse_locale(&context.locale)?;
        let time_zone: Tz = context
            .time_zone
            .parse()
            .map_err(|_| format!("'{}' is not a valid IANA timezone", context.time_zone))?;

        Ok(Self {
            locale,
            time_zone,
            pattern: assemble_pattern(config),
            is_fallback: false,
        })
    }

    /// Whether this formatter was substituted from the default context.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// The timezone this formatter renders in (the fallback zone after a
    /// construction fallback).
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Formats an instant for display.
    ///
    /// On a formatting error the result is a plain RFC 3339 rendering in the
    /// formatter's timezone; the caller never sees a failure.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        let local = instant.with_timezone(&self.time_zone);

        let mut out = String::new();
        match write!(out, "{}", local.format_localized(&self.pattern, self.locale)) {
            Ok(()) => out,
            Err(_) => {
                warn!(pattern = %self.pattern, "formatting failed, using plain rendering");
                local.to_rfc3339()
            }
        }
    }
}

/// Parses a locale name, accepting both BCP 47 ("fr-FR") and POSIX
/// ("fr_FR") forms.
fn parse_locale(name: &str) -> Result<Locale, String> {
    let posix = name.replace('-', "_");
    if let Ok(locale) = Locale::try_from(posix.as_str()) {
        return Ok(locale);
    }

    // Retry with conventional casing: language lowercase, region uppercase
    let recased = match posix.split_once('_') {
        Some((language, region)) => {
            format!("{}_{}", language.to_lowercase(), region.to_uppercase())
        }
        None => posix.to_lowercase(),
    };
    Locale::try_from(recased.as_str()).map_err(|_| format!("unknown locale '{name}'"))
}

/// Strftime pattern for the date portion.
fn date_pattern(style: DateStyle) -> &'static str {
    match style {
        DateStyle::Full => "%A %-d %B %Y",
        DateStyle::Long => "%-d %B %Y",
        DateStyle::Medium => "%-d %b %Y",
        // %x is the locale's own numeric date format
        DateStyle::Short => "%x",
    }
}

/// Strftime pattern for the time portion.
///
/// The hour is always %H: 24-hour display is forced regardless of the
/// locale's convention, and the seconds field appears only when requested.
fn time_pattern(style: TimeStyle, show_seconds: bool) -> String {
    let mut pattern = String::from("%H:%M");
    if show_seconds {
        pattern.push_str(":%S");
    }
    match style {
        TimeStyle::Long => pattern.push_str(" %Z"),
        TimeStyle::Full => pattern.push_str(" %Z %:z"),
        TimeStyle::Short | TimeStyle::Medium => {}
    }
    pattern
}

/// Assembles the full pattern for the configured display mode.
fn assemble_pattern(config: &ClockConfig) -> String {
    match config.mode {
        DisplayMode::DateTime => format!(
            "{}, {}",
            date_pattern(config.date_style),
            time_pattern(config.time_style, config.show_seconds)
        ),
        DisplayMode::Time => time_pattern(config.time_style, config.show_seconds),
        DisplayMode::Date => date_pattern(config.date_style).to_string(),
    }
}
