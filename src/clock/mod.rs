//! The live clock display unit.
//!
//! `LiveClock` ties the resolver, formatter, scheduler and visibility
//! tracker together: it owns the displayed instant, decides when a due tick
//! or focus change may replace it, and routes configuration changes to the
//! right rebuild (formatter vs schedule). The run loop drives it with
//! explicit `now` values, which keeps every part testable without timers.

pub mod config;
pub mod format;
pub mod resolve;
pub mod scheduler;
pub mod visibility;

use chrono::{DateTime, SecondsFormat, Utc};

use self::config::{ClockConfig, DisplayMode};
use self::format::ClockFormatter;
use self::resolve::{resolve_context, Environment, ResolvedContext};
use self::scheduler::{BoundaryScheduler, Cadence, Tick};
use self::visibility::VisibilityTracker;

/// A self-updating, locale-aware clock.
pub struct LiveClock {
    config: ClockConfig,
    context: ResolvedContext,
    formatter: ClockFormatter,
    scheduler: BoundaryScheduler,
    visibility: VisibilityTracker,
    /// The instant driving the render; replaced, never mutated in place
    displayed: DateTime<Utc>,
    torn_down: bool,
}

impl LiveClock {
    /// Mounts a clock: resolves the context, builds the formatter and arms
    /// the first boundary deadline.
    pub fn new(config: ClockConfig, env: &dyn Environment, now: DateTime<Utc>) -> Self {
        let context = resolve_context(config.locale.as_deref(), config.time_zone.as_deref(), env);
        let formatter = ClockFormatter::new(&context, &config);

        let mut scheduler = BoundaryScheduler::new(
            Cadence::for_config(&config),
            config.pause_when_hidden,
            formatter.time_zone(),
        );
        scheduler.schedule(now);

        Self {
            visibility: VisibilityTracker::new(config.pause_when_hidden),
            displayed: now,
            config,
            context,
            formatter,
            scheduler,
            torn_down: false,
        }
    }

    /// The locale and timezone actually in use for formatting.
    pub fn context(&self) -> &ResolvedContext {
        &self.context
    }

    /// The instant currently driving the render.
    pub fn displayed(&self) -> DateTime<Utc> {
        self.displayed
    }

    /// Whether formatting runs on the substituted default context.
    pub fn is_fallback(&self) -> bool {
        self.formatter.is_fallback()
    }

    /// Whether refreshes are currently being suppressed.
    pub fn is_paused(&self) -> bool {
        self.config.pause_when_hidden && !self.visibility.is_visible()
    }

    /// The displayed instant, formatted for the user.
    pub fn formatted(&self) -> String {
        self.formatter.format(self.displayed)
    }

    /// Machine-readable timestamp of the displayed instant (date-only in
    /// date mode).
    pub fn timestamp(&self) -> String {
        match self.config.mode {
            DisplayMode::Date => self.displayed.format("%Y-%m-%d").to_string(),
            DisplayMode::DateTime | DisplayMode::Time => {
                self.displayed.to_rfc3339_opts(SecondsFormat::Secs, true)
            }
        }
    }

    /// When the run loop should next wake for this clock.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.scheduler.next_deadline()
    }

    /// Drives the scheduler. Returns true when the display changed.
    pub fn on_tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.torn_down {
            return false;
        }
        match self.scheduler.fire_due(now, self.visibility.is_visible()) {
            Some(Tick::Refresh) => {
                self.displayed = now;
                true
            }
            Some(Tick::Suppressed) | None => false,
        }
    }

    /// Records a focus change. On a regain with the immediate-refresh
    /// policy enabled, the display updates independently of the schedule.
    /// Returns true when the display changed.
    pub fn set_visible(&mut self, visible: bool, now: DateTime<Utc>) -> bool {
        if self.torn_down {
            return false;
        }
        let regained = self.visibility.set_visible(visible);
        if regained && self.config.update_on_visibility_change {
            self.displayed = now;
            return true;
        }
        false
    }

    /// Refreshes the display immediately, outside the schedule.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        if !self.torn_down {
            self.displayed = now;
        }
    }

    /// Applies a new configuration.
    ///
    /// Locale/timezone/style/mode changes rebuild the formatter;
    /// seconds/pause/mode changes rebuild the schedule. Anything else is
    /// left untouched, so a pure formatter change never disturbs the
    /// armed deadline.
    pub fn apply_config(&mut self, config: ClockConfig, env: &dyn Environment, now: DateTime<Utc>) {
        if self.torn_down || config == self.config {
            return;
        }

        let formatter_dirty = config.locale != self.config.locale
            || config.time_zone != self.config.time_zone
            || config.date_style != self.config.date_style
            || config.time_style != self.config.time_style
            || config.show_seconds != self.config.show_seconds
            || config.mode != self.config.mode;
        let schedule_dirty = config.show_seconds != self.config.show_seconds
            || config.pause_when_hidden != self.config.pause_when_hidden
            || config.mode != self.config.mode;
        let pause_changed = config.pause_when_hidden != self.config.pause_when_hidden;

        self.config = config;

        if formatter_dirty {
            self.context = resolve_context(
                self.config.locale.as_deref(),
                self.config.time_zone.as_deref(),
                env,
            );
            self.formatter = ClockFormatter::new(&self.context, &self.config);
        }

        if pause_changed {
            self.visibility = VisibilityTracker::new(self.config.pause_when_hidden);
        }

        if schedule_dirty {
            self.scheduler = BoundaryScheduler::new(
                Cadence::for_config(&self.config),
                self.config.pause_when_hidden,
                self.formatter.time_zone(),
            );
            self.scheduler.schedule(now);
        }
    }

    /// Cancels all outstanding deadlines. Nothing mutates the clock after
    /// this.
    pub fn teardown(&mut self) {
        self.scheduler.cancel();
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::resolve::tests::MockEnvironment;
    use chrono::{Duration, TimeZone};

    fn paris_config() -> ClockConfig {
        ClockConfig {
            locale: Some("fr-FR".to_string()),
            time_zone: Some("Europe/Paris".to_string()),
            ..ClockConfig::default()
        }
    }

    fn at(h: u32, m: u32, s: u32, ms: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, h, m, s).unwrap() + Duration::milliseconds(ms as i64)
    }

    fn mounted_at(h: u32, m: u32, s: u32, ms: u32) -> LiveClock {
        LiveClock::new(paris_config(), &MockEnvironment::empty(), at(h, m, s, ms))
    }

    #[test]
    fn test_mount_displays_the_mount_instant() {
        let clock = mounted_at(12, 34, 59, 500);

        assert_eq!(clock.displayed(), at(12, 34, 59, 500));
        assert_eq!(clock.next_deadline(), Some(at(12, 35, 0, 0)));
        assert!(!clock.formatted().is_empty());
    }

    #[test]
    fn test_due_tick_replaces_the_displayed_instant() {
        let mut clock = mounted_at(12, 34, 59, 500);

        assert!(clock.on_tick(at(12, 35, 0, 2)));
        assert_eq!(clock.displayed(), at(12, 35, 0, 2));
    }

    #[test]
    fn test_hidden_clock_keeps_a_stale_display() {
        let mut clock = mounted_at(12, 34, 59, 500);
        clock.on_tick(at(12, 35, 0, 0));
        clock.set_visible(false, at(12, 35, 10, 0));

        // Several consecutive due ticks, none may touch the display
        for minute in 36..40 {
            assert!(!clock.on_tick(at(12, minute, 0, 0)));
        }
        assert_eq!(clock.displayed(), at(12, 35, 0, 0));
        assert!(clock.is_paused());
    }

    #[test]
    fn test_focus_regain_refreshes_immediately() {
        let mut clock = mounted_at(12, 34, 59, 500);
        clock.on_tick(at(12, 35, 0, 0));
        clock.set_visible(false, at(12, 35, 10, 0));

        // Mid-interval, far from any boundary
        assert!(clock.set_visible(true, at(12, 37, 23, 456)));
        assert_eq!(clock.displayed(), at(12, 37, 23, 456));
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_focus_regain_without_refresh_policy() {
        let config = ClockConfig {
            update_on_visibility_change: false,
            ..paris_config()
        };
        let mut clock = LiveClock::new(config, &MockEnvironment::empty(), at(12, 0, 0, 0));

        clock.set_visible(false, at(12, 0, 10, 0));
        assert!(!clock.set_visible(true, at(12, 0, 20, 0)));
        assert_eq!(clock.displayed(), at(12, 0, 0, 0));
    }

    #[test]
    fn test_focus_events_are_ignored_without_pausing() {
        let config = ClockConfig {
            pause_when_hidden: false,
            ..paris_config()
        };
        let mut clock = LiveClock::new(config, &MockEnvironment::empty(), at(12, 34, 59, 500));
        clock.on_tick(at(12, 35, 0, 0));

        // No subscription: losing focus gates nothing
        clock.set_visible(false, at(12, 35, 10, 0));
        assert!(clock.on_tick(at(12, 36, 0, 0)));
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_teardown_stops_every_mutation_path() {
        let mut clock = mounted_at(12, 34, 59, 500);
        clock.teardown();

        // The boundary deadline was pending at teardown
        assert_eq!(clock.next_deadline(), None);
        assert!(!clock.on_tick(at(12, 35, 0, 0)));
        assert!(!clock.set_visible(true, at(12, 36, 0, 0)));
        clock.refresh(at(12, 37, 0, 0));
        assert_eq!(clock.displayed(), at(12, 34, 59, 500));
    }

    #[test]
    fn test_formatter_change_does_not_reschedule() {
        let mut clock = mounted_at(12, 34, 59, 500);
        let deadline_before = clock.next_deadline();

        let reconfigured = ClockConfig {
            locale: Some("en-US".to_string()),
            time_zone: Some("America/New_York".to_string()),
            ..paris_config()
        };
        clock.apply_config(reconfigured, &MockEnvironment::empty(), at(12, 34, 59, 900));

        assert_eq!(clock.next_deadline(), deadline_before);
        assert_eq!(clock.context().time_zone, "America/New_York");
    }

    #[test]
    fn test_cadence_change_reschedules() {
        let mut clock = mounted_at(12, 34, 30, 0);
        assert_eq!(clock.next_deadline(), Some(at(12, 35, 0, 0)));

        let reconfigured = ClockConfig {
            show_seconds: true,
            ..paris_config()
        };
        clock.apply_config(reconfigured, &MockEnvironment::empty(), at(12, 34, 30, 250));

        // Now second-aligned
        assert_eq!(clock.next_deadline(), Some(at(12, 34, 31, 0)));
    }

    #[test]
    fn test_manual_refresh_is_schedule_independent() {
        let mut clock = mounted_at(12, 34, 59, 500);
        let deadline = clock.next_deadline();

        clock.refresh(at(12, 34, 59, 800));

        assert_eq!(clock.displayed(), at(12, 34, 59, 800));
        assert_eq!(clock.next_deadline(), deadline);
    }

    #[test]
    fn test_invalid_timezone_surfaces_as_fallback() {
        let config = ClockConfig {
            time_zone: Some("Invalid/Zone".to_string()),
            ..paris_config()
        };
        let clock = LiveClock::new(config, &MockEnvironment::empty(), at(12, 0, 0, 0));

        assert!(clock.is_fallback());
        assert!(!clock.formatted().is_empty());
        // The requested context is still reported to the user
        assert_eq!(clock.context().time_zone, "Invalid/Zone");
    }

    #[test]
    fn test_timestamp_granularity_follows_the_mode() {
        let clock = mounted_at(12, 34, 56, 0);
        assert_eq!(clock.timestamp(), "2026-08-06T12:34:56Z");

        let config = ClockConfig {
            mode: DisplayMode::Date,
            ..paris_config()
        };
        let clock = LiveClock::new(config, &MockEnvironment::empty(), at(12, 34, 56, 0));
        assert_eq!(clock.timestamp(), "2026-08-06");
    }

    #[test]
    fn test_date_mode_arms_a_midnight_deadline() {
        let config = ClockConfig {
            mode: DisplayMode::Date,
            ..paris_config()
        };
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let clock = LiveClock::new(config, &MockEnvironment::empty(), now);

        // Next Paris midnight (CET) in UTC
        assert_eq!(
            clock.next_deadline(),
            Some(Utc.with_ymd_and_hms(2026, 1, 15, 23, 0, 0).unwrap())
        );
    }
}
