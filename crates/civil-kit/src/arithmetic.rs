//! Calendar arithmetic group: add a signed count of a named unit to a date
//! or date-time.
//!
//! Month and year additions are calendar-aware: when the naive result would
//! not exist (e.g. January 31 plus one month), the day clamps to the last
//! valid day of the target month. Unit codes are decoded once via
//! [`IntervalUnit::from_code`]; an unrecognized code returns the input
//! unchanged rather than failing.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};

use crate::error::{CivilError, Result};
use crate::types::{CivilDate, CivilDateTime, IntervalUnit};
use crate::validate::require;

/// Add `amount` of the unit named by `interval` to a date.
///
/// Recognized codes for dates are `"yyyy"`, `"m"` and `"d"`; every other
/// code (including the time-of-day codes) leaves the date unchanged.
pub fn date_add(
    interval: Option<&str>,
    amount: Option<i32>,
    date: Option<CivilDate>,
) -> Result<CivilDate> {
    let interval = require(interval, "interval", "date_add")?;
    let amount = require(amount, "amount", "date_add")?;
    let date = require(date, "date", "date_add")?;

    let shifted = match IntervalUnit::from_code(interval) {
        Some(IntervalUnit::Year) => shift_date_months(date.as_naive(), i64::from(amount) * 12),
        Some(IntervalUnit::Month) => shift_date_months(date.as_naive(), i64::from(amount)),
        Some(IntervalUnit::Day) => date
            .as_naive()
            .checked_add_signed(Duration::days(i64::from(amount))),
        _ => return Ok(date),
    };

    shifted
        .map(CivilDate::from_naive)
        .ok_or(CivilError::OutOfRange {
            operation: "date_add",
        })
}

/// Add `amount` of the unit named by `interval` to a date-time.
///
/// Recognized codes are the full set: `"yyyy"`, `"m"`, `"d"`, `"h"`,
/// `"n"` (minutes), `"s"`. Any other code leaves the value unchanged.
pub fn date_time_add(
    interval: Option<&str>,
    amount: Option<i32>,
    date_time: Option<CivilDateTime>,
) -> Result<CivilDateTime> {
    let interval = require(interval, "interval", "date_time_add")?;
    let amount = require(amount, "amount", "date_time_add")?;
    let date_time = require(date_time, "date_time", "date_time_add")?;

    let naive = date_time.as_naive();
    let amount = i64::from(amount);
    let shifted = match IntervalUnit::from_code(interval) {
        Some(IntervalUnit::Year) => shift_date_time_months(naive, amount * 12),
        Some(IntervalUnit::Month) => shift_date_time_months(naive, amount),
        Some(IntervalUnit::Day) => naive.checked_add_signed(Duration::days(amount)),
        Some(IntervalUnit::Hour) => naive.checked_add_signed(Duration::hours(amount)),
        Some(IntervalUnit::Minute) => naive.checked_add_signed(Duration::minutes(amount)),
        Some(IntervalUnit::Second) => naive.checked_add_signed(Duration::seconds(amount)),
        None => return Ok(date_time),
    };

    shifted
        .map(CivilDateTime::from_naive)
        .ok_or(CivilError::OutOfRange {
            operation: "date_time_add",
        })
}

/// Signed month shift with end-of-month clamping.
fn shift_date_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    }
}

/// Signed month shift over a date-time, preserving the time-of-day.
fn shift_date_time_months(date_time: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        date_time.checked_add_months(Months::new(magnitude))
    } else {
        date_time.checked_sub_months(Months::new(magnitude))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
