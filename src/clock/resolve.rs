//! Locale and timezone resolution.
//!
//! The effective locale and timezone come from a fallback chain: explicit
//! configuration → environment-reported preference → hardcoded default.
//! Resolution never fails and never yields an empty string; validation of
//! the resolved values is the formatter's job.

use crate::constants::{DEFAULT_LOCALE, DEFAULT_TIME_ZONE};

/// Source of environment-reported locale and timezone preferences.
///
/// Abstracted as a trait so resolution is testable without touching the
/// host system.
pub trait Environment {
    /// The system locale preference, if one is reported.
    fn locale(&self) -> Option<String>;

    /// The system IANA timezone, if one is reported.
    fn time_zone(&self) -> Option<String>;
}

/// Environment source backed by the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }

    fn time_zone(&self) -> Option<String> {
        iana_time_zone::get_timezone().ok()
    }
}

/// The concrete locale and timezone used for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContext {
    /// Formatting locale, e.g. "fr-FR"
    pub locale: String,
    /// IANA timezone name, e.g. "Europe/Paris"
    pub time_zone: String,
}

impl ResolvedContext {
    /// The hardcoded default context, guaranteed valid for formatter
    /// construction.
    pub fn fallback() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

/// Treats empty and whitespace-only strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolves the effective locale and timezone.
///
/// Per field: explicit value if present and non-empty, else the environment
/// preference, else the hardcoded default.
pub fn resolve_context(
    explicit_locale: Option<&str>,
    explicit_time_zone: Option<&str>,
    env: &dyn Environment,
) -> ResolvedContext {
    let locale = non_empty(explicit_locale.map(str::to_string))
        .or_else(|| non_empty(env.locale()))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let time_zone = non_empty(explicit_time_zone.map(str::to_string))
        .or_else(|| non_empty(env.time_zone()))
        .unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());

    ResolvedContext { locale, time_zone }
}
