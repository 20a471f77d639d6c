//! Calendar query group: field projections, leap-year and month-length
//! lookups, single-day offsets, and day differences.
//!
//! Every operation with optional inputs validates them first and performs
//! no other work on failure. The only environmental reads are in
//! [`current_date`] and [`current_date_time`], which take the clock as an
//! explicit capability.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::clock::Clock;
use crate::error::{CivilError, Result};
use crate::types::{CivilDate, CivilDateTime, Weekday};
use crate::validate::require;

/// Current calendar date. The time-of-day is dropped entirely.
pub fn current_date(clock: &impl Clock) -> CivilDate {
    clock.now().date()
}

/// Current date and time, retaining the time-of-day.
pub fn current_date_time(clock: &impl Clock) -> CivilDateTime {
    clock.now()
}

/// The year field of a date.
pub fn year(date: Option<CivilDate>) -> Result<i32> {
    let date = require(date, "date", "year")?;
    Ok(date.year())
}

/// The month field of a date (1..=12).
pub fn month(date: Option<CivilDate>) -> Result<u32> {
    let date = require(date, "date", "month")?;
    Ok(date.month())
}

/// The day-of-month field of a date (1..=31).
pub fn day(date: Option<CivilDate>) -> Result<u32> {
    let date = require(date, "date", "day")?;
    Ok(date.day())
}

/// The day of the week, numbered 1 = Sunday through 7 = Saturday.
pub fn day_of_week(date: Option<CivilDate>) -> Result<Weekday> {
    let date = require(date, "date", "day_of_week")?;
    Ok(Weekday::from(date.as_naive().weekday()))
}

/// The 1-based ordinal day within the date's year (1..=365 or 1..=366).
pub fn day_of_year(date: Option<CivilDate>) -> Result<u32> {
    let date = require(date, "date", "day_of_year")?;
    Ok(date.as_naive().ordinal())
}

/// Whether the Gregorian leap-year rule holds for `year`.
pub fn is_leap_year(year: Option<i32>) -> Result<bool> {
    let year = require(year, "year", "is_leap_year")?;
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| {
        CivilError::InvalidFields(format!("year {year} is outside the calendar range"))
    })?;
    Ok(first.leap_year())
}

/// Number of days in the given month of the given year (e.g. 28 or 29 for
/// February, depending on the year).
pub fn days_in_month(year: Option<i32>, month: Option<u32>) -> Result<u32> {
    let year = require(year, "year", "days_in_month")?;
    let month = require(month, "month", "days_in_month")?;
    month_length(year, month).ok_or_else(|| {
        CivilError::InvalidFields(format!("{year}-{month:02} is not a calendar month"))
    })
}

/// The date one day after `date`.
pub fn tomorrow(date: Option<CivilDate>) -> Result<CivilDate> {
    let date = require(date, "date", "tomorrow")?;
    date.as_naive()
        .succ_opt()
        .map(CivilDate::from_naive)
        .ok_or(CivilError::OutOfRange {
            operation: "tomorrow",
        })
}

/// The date one day before `date`.
pub fn yesterday(date: Option<CivilDate>) -> Result<CivilDate> {
    let date = require(date, "date", "yesterday")?;
    date.as_naive()
        .pred_opt()
        .map(CivilDate::from_naive)
        .ok_or(CivilError::OutOfRange {
            operation: "yesterday",
        })
}

/// The time-of-day component of a date-time.
///
/// The value is shifted **back by 12 hours** before the time component is
/// read (so `2024-05-10T08:00:00` yields `20:00:00`). Callers rely on this
/// offset; keep it.
pub fn time_part(date_time: Option<CivilDateTime>) -> Result<NaiveTime> {
    let date_time = require(date_time, "date_time", "time_part")?;
    let shifted = date_time
        .as_naive()
        .checked_sub_signed(Duration::hours(12))
        .ok_or(CivilError::OutOfRange {
            operation: "time_part",
        })?;
    Ok(shifted.time())
}

/// `date2 - date1` in whole days. `0` whenever `date1` is strictly after
/// `date2`; never negative.
pub fn days_difference(date1: Option<CivilDate>, date2: Option<CivilDate>) -> Result<i64> {
    let date1 = require(date1, "date1", "days_difference")?;
    let date2 = require(date2, "date2", "days_difference")?;
    if date1 > date2 {
        return Ok(0);
    }
    Ok(date2
        .as_naive()
        .signed_duration_since(date1.as_naive())
        .num_days())
}

/// Last day number of `(year, month)` via the first of the following month.
pub(crate) fn month_length(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    Some(NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?.day())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(year: i32, month: u32, day: u32) -> CivilDate {
        CivilDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_current_date_drops_time_of_day() {
        let clock = FixedClock(CivilDateTime::from_ymd_hms(2026, 2, 18, 14, 30, 0).unwrap());
        assert_eq!(current_date(&clock), date(2026, 2, 18));
    }

    #[test]
    fn test_current_date_time_retains_time_of_day() {
        let instant = CivilDateTime::from_ymd_hms(2026, 2, 18, 14, 30, 0).unwrap();
        assert_eq!(current_date_time(&FixedClock(instant)), instant);
    }

    #[test]
    fn test_field_extraction() {
        let d = date(2019, 10, 2);
        assert_eq!(year(Some(d)).unwrap(), 2019);
        assert_eq!(month(Some(d)).unwrap(), 10);
        assert_eq!(day(Some(d)).unwrap(), 2);
    }

    #[test]
    fn test_field_extraction_requires_date() {
        assert!(matches!(
            year(None),
            Err(CivilError::MissingArgument { argument: "date", .. })
        ));
        assert!(month(None).is_err());
        assert!(day(None).is_err());
    }

    #[test]
    fn test_day_of_week_sunday_is_one() {
        // 2024-01-07 was a Sunday, 2024-01-01 a Monday
        assert_eq!(day_of_week(Some(date(2024, 1, 7))).unwrap(), Weekday::Sunday);
        assert_eq!(
            day_of_week(Some(date(2024, 1, 1))).unwrap().number(),
            2
        );
    }

    #[test]
    fn test_day_of_week_always_in_range() {
        let mut cursor = date(2023, 12, 25).as_naive();
        for _ in 0..60 {
            let number = day_of_week(Some(CivilDate::from_naive(cursor)))
                .unwrap()
                .number();
            assert!((1..=7).contains(&number));
            cursor = cursor.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(Some(date(2023, 1, 1))).unwrap(), 1);
        assert_eq!(day_of_year(Some(date(2023, 12, 31))).unwrap(), 365);
        // Leap year pushes Dec 31 to ordinal 366
        assert_eq!(day_of_year(Some(date(2024, 12, 31))).unwrap(), 366);
    }

    #[test]
    fn test_is_leap_year_gregorian_rule() {
        assert!(is_leap_year(Some(2024)).unwrap());
        assert!(!is_leap_year(Some(2023)).unwrap());
        // Century rule: 1900 no, 2000 yes
        assert!(!is_leap_year(Some(1900)).unwrap());
        assert!(is_leap_year(Some(2000)).unwrap());
        assert!(is_leap_year(None).is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(Some(2024), Some(2)).unwrap(), 29);
        assert_eq!(days_in_month(Some(2023), Some(2)).unwrap(), 28);
        assert_eq!(days_in_month(Some(2023), Some(12)).unwrap(), 31);
        assert_eq!(days_in_month(Some(2023), Some(4)).unwrap(), 30);
    }

    #[test]
    fn test_days_in_month_rejects_bad_month() {
        assert!(matches!(
            days_in_month(Some(2023), Some(13)),
            Err(CivilError::InvalidFields(_))
        ));
        assert!(days_in_month(None, Some(4)).is_err());
        assert!(days_in_month(Some(2023), None).is_err());
    }

    #[test]
    fn test_tomorrow_and_yesterday_cross_boundaries() {
        assert_eq!(tomorrow(Some(date(2023, 12, 31))).unwrap(), date(2024, 1, 1));
        assert_eq!(yesterday(Some(date(2024, 3, 1))).unwrap(), date(2024, 2, 29));
        assert!(tomorrow(None).is_err());
        assert!(yesterday(None).is_err());
    }

    #[test]
    fn test_time_part_applies_twelve_hour_rollback() {
        let afternoon = CivilDateTime::from_ymd_hms(2024, 5, 10, 14, 30, 15).unwrap();
        assert_eq!(
            time_part(Some(afternoon)).unwrap(),
            NaiveTime::from_hms_opt(2, 30, 15).unwrap()
        );

        // Morning values wrap into the previous day's evening
        let morning = CivilDateTime::from_ymd_hms(2024, 5, 10, 8, 0, 0).unwrap();
        assert_eq!(
            time_part(Some(morning)).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_days_difference_forward() {
        assert_eq!(
            days_difference(Some(date(2024, 1, 1)), Some(date(2024, 1, 31))).unwrap(),
            30
        );
        assert_eq!(
            days_difference(Some(date(2024, 2, 1)), Some(date(2024, 3, 1))).unwrap(),
            29
        );
        assert_eq!(
            days_difference(Some(date(2024, 1, 1)), Some(date(2024, 1, 1))).unwrap(),
            0
        );
    }

    #[test]
    fn test_days_difference_clamps_reversed_ranges_to_zero() {
        assert_eq!(
            days_difference(Some(date(2024, 1, 31)), Some(date(2024, 1, 1))).unwrap(),
            0
        );
    }

    #[test]
    fn test_days_difference_requires_both_dates() {
        assert!(days_difference(None, Some(date(2024, 1, 1))).is_err());
        assert!(days_difference(Some(date(2024, 1, 1)), None).is_err());
    }
}
