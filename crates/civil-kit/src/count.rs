//! Weekday-occurrence counting over inclusive date ranges.
//!
//! [`count_weekday_between`] answers "how many Mondays between these two
//! dates" in O(1) instead of walking the range day by day. The full weeks
//! in the range each contribute exactly one occurrence; the partial
//! (remainder) week is reduced to an interval-membership test on weekday
//! numbers. Because the partial week may cross a week boundary (a range
//! can end on a Tuesday after starting on a Friday), the end and target
//! weekdays are first lifted into a "virtual" following week whenever they
//! sort below the start weekday, which makes the membership test a plain
//! closed-interval check.

use chrono::Datelike;

use crate::error::Result;
use crate::types::{CivilDate, Weekday};
use crate::validate::require;

/// Count occurrences of `weekday` within `[start_date, end_date]`, both
/// ends inclusive.
///
/// Returns `0` (not an error) when `start_date` is strictly after
/// `end_date`. All three arguments must be present.
pub fn count_weekday_between(
    weekday: Option<Weekday>,
    start_date: Option<CivilDate>,
    end_date: Option<CivilDate>,
) -> Result<i64> {
    let weekday = require(weekday, "weekday", "count_weekday_between")?;
    let start_date = require(start_date, "start_date", "count_weekday_between")?;
    let end_date = require(end_date, "end_date", "count_weekday_between")?;

    if start_date > end_date {
        return Ok(0);
    }

    let total_days = end_date
        .as_naive()
        .signed_duration_since(start_date.as_naive())
        .num_days();
    let full_weeks = total_days / 7;
    let remainder_days = total_days % 7;

    let start_day = i64::from(Weekday::from(start_date.as_naive().weekday()).number());
    let mut end_day = i64::from(Weekday::from(end_date.as_naive().weekday()).number());
    let mut target = i64::from(weekday.number());

    // Lift wrapped values into the virtual following week so the remainder
    // window below is a contiguous interval.
    if end_day < start_day {
        end_day += 7;
    }
    if target < start_day {
        target += 7;
    }

    let window_start = end_day - remainder_days;
    let mut count = full_weeks;
    if (window_start..=end_day).contains(&target) {
        count += 1;
    }
    Ok(count)
}

// ── Tests ───────────────────────────────────────────────────────────────────
