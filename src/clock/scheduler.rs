//! Boundary-aligned refresh scheduling.
//!
//! The scheduler keeps the refresh cadence aligned to wall-clock boundaries
//! rather than to an offset from whenever the clock started: a per-minute
//! display updates exactly at :00 seconds of every minute, a per-second
//! display at each second boundary, and the date-only display at local
//! midnight.
//!
//! The scheduler itself owns no timer; it computes deadlines and the run
//! loop sleeps until them. While the terminal is unfocused, due ticks are
//! suppressed but the recurring deadline keeps advancing by whole intervals,
//! so alignment never has to be re-derived when focus returns.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;

use crate::clock::config::{ClockConfig, DisplayMode};
use crate::constants::{DAY_INTERVAL_MS, MINUTE_INTERVAL_MS, SECOND_INTERVAL_MS};

/// Refresh cadence, aligned to wall-clock boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Tick at each second boundary
    PerSecond,
    /// Tick at each minute boundary
    PerMinute,
    /// Tick at local midnight, then every 24 hours
    Daily,
}

impl Cadence {
    /// Derives the cadence from the configuration.
    pub fn for_config(config: &ClockConfig) -> Self {
        match config.mode {
            DisplayMode::Date => Cadence::Daily,
            DisplayMode::DateTime | DisplayMode::Time => {
                if config.show_seconds {
                    Cadence::PerSecond
                } else {
                    Cadence::PerMinute
                }
            }
        }
    }

    /// The recurring tick period in milliseconds.
    pub fn interval_ms(self) -> i64 {
        match self {
            Cadence::PerSecond => SECOND_INTERVAL_MS,
            Cadence::PerMinute => MINUTE_INTERVAL_MS,
            Cadence::Daily => DAY_INTERVAL_MS,
        }
    }
}

/// Outcome of a due deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The displayed instant should be refreshed
    Refresh,
    /// The tick fired but the visibility gate suppressed the refresh
    Suppressed,
}

/// Scheduler lifecycle. Both deadline-carrying states are cleared by
/// `cancel`, which is the only way anything outlives a reschedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No deadline outstanding (before scheduling or after teardown)
    Idle,
    /// Waiting for the first boundary
    WaitingForBoundary { deadline: DateTime<Utc> },
    /// Recurring cadence armed
    Running { next_fire: DateTime<Utc> },
}

/// Computes and advances boundary-aligned refresh deadlines.
pub struct BoundaryScheduler {
    cadence: Cadence,
    pause_when_hidden: bool,
    time_zone: Tz,
    state: State,
}

impl BoundaryScheduler {
    /// Creates an idle scheduler; call [`schedule`](Self::schedule) to arm it.
    pub fn new(cadence: Cadence, pause_when_hidden: bool, time_zone: Tz) -> Self {
        Self {
            cadence,
            pause_when_hidden,
            time_zone,
            state: State::Idle,
        }
    }

    /// (Re)schedules from `now`: cancels any outstanding deadline and
    /// computes the delay to the next boundary.
    pub fn schedule(&mut self, now: DateTime<Utc>) {
        self.cancel();
        self.state = State::WaitingForBoundary {
            deadline: self.next_boundary(now),
        };
    }

    /// Clears all outstanding deadlines. Nothing fires until the next
    /// `schedule` call.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }

    /// Whether the scheduler holds no deadline.
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    /// The next instant the run loop should wake at, if any.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        match self.state {
            State::Idle => None,
            State::WaitingForBoundary { deadline } => Some(deadline),
            State::Running { next_fire } => Some(next_fire),
        }
    }

    /// Fires at most one due tick.
    ///
    /// The first boundary tick always refreshes; recurring ticks are
    /// suppressed while `visible` is false and pausing is enabled. Either
    /// way the next deadline advances by whole intervals, so it stays on
    /// boundary multiples even after missed wakeups.
    pub fn fire_due(&mut self, now: DateTime<Utc>, visible: bool) -> Option<Tick> {
        match self.state {
            State::Idle => None,
            State::WaitingForBoundary { deadline } => {
                if now < deadline {
                    return None;
                }
                self.state = State::Running {
                    next_fire: deadline + self.interval(),
                };
                Some(Tick::Refresh)
            }
            State::Running { mut next_fire } => {
                if now < next_fire {
                    return None;
                }
                let interval = self.interval();
                while next_fire <= now {
                    next_fire += interval;
                }
                self.state = State::Running { next_fire };

                if self.pause_when_hidden && !visible {
                    Some(Tick::Suppressed)
                } else {
                    Some(Tick::Refresh)
                }
            }
        }
    }

    fn interval(&self) -> Duration {
        Duration::milliseconds(self.cadence.interval_ms())
    }

    /// The first deadline: the next epoch multiple of the tick interval, or
    /// the next local midnight for the daily cadence.
    fn next_boundary(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.cadence {
            Cadence::PerSecond | Cadence::PerMinute => {
                let interval = self.cadence.interval_ms();
                let delay = interval - now.timestamp_millis().rem_euclid(interval);
                now + Duration::milliseconds(delay)
            }
            Cadence::Daily => next_local_midnight(now, self.time_zone),
        }
    }
}

/// The next 00:00:00 in `tz` strictly after `now`.
fn next_local_midnight(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let local = now.with_timezone(&tz);
    let midnight = local
        .date_naive()
        .succ_opt()
        .and_then(|next_day| next_day.and_hms_opt(0, 0, 0))
        .and_then(|naive| tz.from_local_datetime(&naive).earliest());

    match midnight {
        Some(instant) => instant.with_timezone(&Utc),
        // Midnight falls in a DST gap (or the calendar overflowed): step a
        // plain day instead
        None => now + Duration::milliseconds(DAY_INTERVAL_MS),
    }
}
