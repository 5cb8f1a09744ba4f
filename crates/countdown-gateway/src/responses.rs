//! Wire response types.
//!
//! Field names are consumed by the bundled front-end scripts and external
//! clients; they are part of the external contract and must not change.
//! `new_year` and `is_new_year_arrived` are strings on the wire.

use countdown_core::{ClockSnapshot, Countdown, SeasonTheme};
use serde::{Deserialize, Serialize};

/// Current date/time view: `/api/current_datetime_now`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatetimeNowResponse {
    pub time_now: String,
    pub date_now: String,
    pub month_name_now: String,
    pub day_of_week_now: String,
}

impl From<ClockSnapshot> for DatetimeNowResponse {
    fn from(snapshot: ClockSnapshot) -> Self {
        Self {
            time_now: snapshot.display_time,
            date_now: snapshot.display_date,
            month_name_now: snapshot.month_label,
            day_of_week_now: snapshot.weekday_name.to_string(),
        }
    }
}

/// Seasonal UI colors: `/api/time_of_year_style`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeOfYearStyleResponse {
    pub primary_color: String,
    pub secondary_color: String,
}

impl From<SeasonTheme> for TimeOfYearStyleResponse {
    fn from(theme: SeasonTheme) -> Self {
        Self {
            primary_color: theme.primary_color.to_string(),
            secondary_color: theme.secondary_color.to_string(),
        }
    }
}

/// Countdown fields: `/api/countdown_timer_until_new_year_data`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountdownResponse {
    pub days_left: i64,
    pub hours_left: i64,
    pub minutes_left: i64,
    pub seconds_left: i64,
    /// Tracked new year as a decimal string
    pub new_year: String,
}

impl CountdownResponse {
    pub fn new(countdown: Countdown, new_year: i32) -> Self {
        Self {
            days_left: countdown.days_left,
            hours_left: countdown.hours_left,
            minutes_left: countdown.minutes_left,
            seconds_left: countdown.seconds_left,
            new_year: new_year.to_string(),
        }
    }
}

/// Arrival flag: `/api/is_new_year_arrived_state`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewYearArrivedResponse {
    /// `"true"` or `"false"` as a string
    pub is_new_year_arrived: String,
}

impl NewYearArrivedResponse {
    pub fn new(arrived: bool) -> Self {
        Self {
            is_new_year_arrived: arrived.to_string(),
        }
    }
}
