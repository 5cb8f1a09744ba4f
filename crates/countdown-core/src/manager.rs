//! The datetime manager: offset-adjusted "now" views and the new-year
//! countdown.
//!
//! State is process-lifetime and tiny: the configured UTC offset, the
//! 12/24-hour display preference, and the year number whose arrival is being
//! tracked. Mutation happens only through the two setters and
//! [`DatetimeManager::check_new_year_arrived`]; callers sharing a manager
//! across request handlers must serialize access themselves (the gateway
//! wraps it in a `RwLock`).

use crate::clock::{Clock, SystemClock};
use crate::season::Season;
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use std::sync::Arc;

const SECS_IN_MINUTE: i64 = 60;
const SECS_IN_HOUR: i64 = 3600;
const SECS_IN_DAY: i64 = 86_400;

/// Weekday names keyed by days-from-Monday index (Monday = 0).
const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Formatted view of the current instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Clock time with a 🕐 prefix, 12- or 24-hour per configuration.
    pub display_time: String,
    /// Calendar date with a 📆 prefix, `YYYY-MM-DD`.
    pub display_date: String,
    /// English month name prefixed with the season marker.
    pub month_label: String,
    /// Weekday name from the fixed Monday-first table.
    pub weekday_name: &'static str,
}

/// Time remaining until the next new year.
///
/// `seconds_left` is the remainder within the final day (0..86400), and
/// `hours_left`/`minutes_left` are derived from that same remainder by plain
/// division. `minutes_left` is therefore cumulative within the day rather
/// than a mod-60 component; the front end renders the fields side by side
/// and this shape is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days_left: i64,
    pub hours_left: i64,
    pub minutes_left: i64,
    pub seconds_left: i64,
}

/// Stateful time-calculation component behind the countdown endpoints.
pub struct DatetimeManager {
    clock: Arc<dyn Clock>,
    utc_offset_hours: i32,
    twelve_hour: bool,
    tracked_new_year: i32,
}

impl DatetimeManager {
    /// Create a manager reading time from `clock`.
    ///
    /// The tracked new year starts at the year after the current one; the
    /// offset starts at 0 and the display defaults to 12-hour.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let tracked_new_year = clock.now_utc().year() + 1;
        Self {
            clock,
            utc_offset_hours: 0,
            twelve_hour: true,
            tracked_new_year,
        }
    }

    /// Select 12-hour (`true`) or 24-hour (`false`) time display.
    pub fn set_display_format(&mut self, twelve_hour: bool) {
        self.twelve_hour = twelve_hour;
    }

    /// Set the whole-hour UTC offset used for all derived views.
    ///
    /// Stored unvalidated: values beyond ±24 are accepted and simply shift
    /// the wall clock further.
    pub fn set_utc_offset(&mut self, hours: i32) {
        self.utc_offset_hours = hours;
    }

    /// The year number whose arrival is currently being tracked.
    pub fn tracked_new_year(&self) -> i32 {
        self.tracked_new_year
    }

    /// Offset-adjusted wall-clock "now".
    ///
    /// Plain fixed-offset arithmetic on the UTC instant; deliberately not a
    /// `FixedOffset` timezone, which would cap the offset at ±24 hours.
    fn offset_now(&self) -> NaiveDateTime {
        (self.clock.now_utc() + TimeDelta::hours(i64::from(self.utc_offset_hours))).naive_utc()
    }

    /// Formatted time, date, month label, and weekday name for "now".
    pub fn clock_snapshot(&self) -> ClockSnapshot {
        let now = self.offset_now();
        let time_pattern = if self.twelve_hour {
            "%I:%M:%S %p"
        } else {
            "%H:%M:%S"
        };
        let season = Season::from_month(now.month());
        let weekday_index = now.weekday().num_days_from_monday() as usize;

        ClockSnapshot {
            display_time: format!("\u{1f550}{}", now.format(time_pattern)),
            display_date: format!("\u{1f4c6}{}", now.format("%Y-%m-%d")),
            month_label: format!("{}{}", season.marker(), now.format("%B")),
            weekday_name: WEEKDAY_NAMES[weekday_index],
        }
    }

    /// Color theme for the current month.
    pub fn season_theme(&self) -> crate::season::SeasonTheme {
        Season::from_month(self.offset_now().month()).theme()
    }

    /// Time remaining until midnight Jan 1 of next year, in the configured
    /// offset.
    pub fn countdown(&self) -> Countdown {
        let now = self.offset_now();
        let target = NaiveDate::from_ymd_opt(now.year() + 1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("Jan 1 midnight is a valid datetime");

        let total = target.signed_duration_since(now).num_seconds().max(0);
        let within_day = total % SECS_IN_DAY;

        Countdown {
            days_left: total / SECS_IN_DAY,
            hours_left: within_day / SECS_IN_HOUR,
            minutes_left: within_day / SECS_IN_MINUTE,
            seconds_left: within_day,
        }
    }

    /// Report whether the tracked new year has arrived since the last check.
    ///
    /// Returns `true` at most once per year-boundary crossing and advances
    /// the tracked year as a side effect.
    pub fn check_new_year_arrived(&mut self) -> bool {
        let current_year = self.offset_now().year();
        if current_year == self.tracked_new_year {
            self.tracked_new_year = current_year + 1;
            true
        } else {
            false
        }
    }
}

impl Default for DatetimeManager {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
