//! # civil-kit
//!
//! Deterministic, stateless helpers over civil dates and date-times:
//! calendar field queries, interval arithmetic, weekday-occurrence
//! counting, fixed-format conversion, and strict comparisons.
//!
//! Every operation is a pure function of its inputs. The only
//! environmental read is the current-date/current-date-time pair, which
//! takes a [`Clock`] capability instead of touching the system clock
//! directly, so "now" can be pinned in tests. Optional inputs are decoded
//! once at the boundary: a missing required argument fails with
//! [`CivilError::MissingArgument`] before any computation happens.
//!
//! ## Modules
//!
//! - [`types`] — `CivilDate`, `CivilDateTime`, `Weekday`, `IntervalUnit`
//! - [`clock`] — injected clock capability (`SystemClock`, `FixedClock`)
//! - [`query`] — field projections, leap years, month lengths, day offsets
//! - [`arithmetic`] — calendar-aware addition of named interval units
//! - [`count`] — closed-form weekday-occurrence counting over date ranges
//! - [`convert`] — fixed-format rendering, parsing, field construction
//! - [`compare`] — strict ordering and equality
//! - [`error`] — error types

pub mod arithmetic;
pub mod clock;
pub mod compare;
pub mod convert;
pub mod count;
pub mod error;
pub mod query;
pub mod types;
mod validate;

pub use arithmetic::{date_add, date_time_add};
pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::{
    date_after, date_before, date_equals, date_time_after, date_time_before, date_time_equals,
};
pub use convert::{
    date_time_to_string, format_to_date, format_to_date_time, string_to_date, string_to_date_time,
    to_date_time, to_full_date_format, to_long_date_format, to_medium_date_format,
    to_short_date_format,
};
pub use count::count_weekday_between;
pub use error::{CivilError, Result};
pub use query::{
    current_date, current_date_time, day, day_of_week, day_of_year, days_difference,
    days_in_month, is_leap_year, month, time_part, tomorrow, year, yesterday,
};
pub use types::{CivilDate, CivilDateTime, IntervalUnit, Weekday};

pub use chrono::NaiveTime;
