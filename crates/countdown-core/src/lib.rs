// Allow missing docs for internal items in development
#![allow(missing_docs)]

//! Countdown Core - date/time calculations for the new-year countdown service.
//!
//! This crate holds the one piece of the system with decision logic: the
//! [`DatetimeManager`], which derives "now" views, seasonal color themes, and
//! the countdown to the next new year from the current instant.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              countdown-core                  │
//! ├─────────────────────────────────────────────┤
//! │  ┌───────────┐      ┌────────────────────┐  │
//! │  │   Clock   │─────▶│  DatetimeManager   │  │
//! │  │  (trait)  │      │                    │  │
//! │  └───────────┘      │  clock_snapshot()  │  │
//! │   SystemClock       │  season_theme()    │  │
//! │   FixedClock        │  countdown()       │  │
//! │                     │  check_new_year…() │  │
//! │                     └────────────────────┘  │
//! └─────────────────────────────────────────────┘
//!                         ▲
//!                         │ invoked per request
//!                  countdown-gateway
//! ```
//!
//! # Behavior
//!
//! - All views are computed against the *offset-adjusted now*: the UTC
//!   instant shifted by a configured whole-hour offset. No timezone database
//!   is involved, only fixed-offset arithmetic.
//! - The season table is total over months 1-12; the weekday table is total
//!   over indices 0-6 (Monday = 0).
//! - `check_new_year_arrived` tracks the year boundary: it returns `true` at
//!   most once per crossing and advances the tracked year as a side effect.
//!
//! Every operation is total; the only external dependency is the clock,
//! injected behind the [`Clock`] trait so tests can pin the instant.

pub mod clock;
pub mod manager;
pub mod season;

pub use clock::{Clock, FixedClock, SystemClock};
pub use manager::{ClockSnapshot, Countdown, DatetimeManager};
pub use season::{Season, SeasonTheme};
