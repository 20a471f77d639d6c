//! Conversion group: fixed-format rendering, string parsing, and
//! field-triple construction.
//!
//! Rendering uses a fixed format table (month and weekday names come from
//! the engine's default English tables; there is no locale parameter).
//! Parsing accepts the ISO form first, then the month-first form the
//! rendered output of older producers used. Field construction clamps an
//! out-of-range day for dates but not for date-times; that asymmetry is
//! deliberate and must not be unified silently.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CivilError, Result};
use crate::query::month_length;
use crate::types::{CivilDate, CivilDateTime};
use crate::validate::{require, require_text};

// ── Output formats ──────────────────────────────────────────────────────────

/// `d/M/yy`, e.g. `2/3/05` for 2005-03-02.
const SHORT_DATE: &str = "%-d/%-m/%y";
/// Abbreviated month, e.g. `Mar 02, 2005`.
const MEDIUM_DATE: &str = "%b %d, %Y";
/// Full month, e.g. `March 02, 2005`.
const LONG_DATE: &str = "%B %d, %Y";
/// Full weekday and month, e.g. `Wednesday, March 02, 2005`.
const FULL_DATE: &str = "%A, %B %d, %Y";
/// Full month plus wall-clock time, e.g. `March 02, 2005 14:30:05`.
const DATE_TIME: &str = "%B %d, %Y %H:%M:%S";

// ── Input formats ───────────────────────────────────────────────────────────

const ISO_DATE: &str = "%Y-%m-%d";
const MONTH_FIRST_DATE: &str = "%m/%d/%Y";
const ISO_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S";
const SPACED_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
const MONTH_FIRST_DATE_TIME: &str = "%m/%d/%Y %H:%M:%S";

// ── Rendering ───────────────────────────────────────────────────────────────

/// Render a date as `d/M/yy` (day and month unpadded, two-digit year).
pub fn to_short_date_format(date: Option<CivilDate>) -> Result<String> {
    let date = require(date, "date", "to_short_date_format")?;
    Ok(date.as_naive().format(SHORT_DATE).to_string())
}

/// Render a date with an abbreviated month name: `Mar 02, 2005`.
pub fn to_medium_date_format(date: Option<CivilDate>) -> Result<String> {
    let date = require(date, "date", "to_medium_date_format")?;
    Ok(date.as_naive().format(MEDIUM_DATE).to_string())
}

/// Render a date with the full month name: `March 02, 2005`.
pub fn to_long_date_format(date: Option<CivilDate>) -> Result<String> {
    let date = require(date, "date", "to_long_date_format")?;
    Ok(date.as_naive().format(LONG_DATE).to_string())
}

/// Render a date with the full weekday and month names:
/// `Wednesday, March 02, 2005`.
pub fn to_full_date_format(date: Option<CivilDate>) -> Result<String> {
    let date = require(date, "date", "to_full_date_format")?;
    Ok(date.as_naive().format(FULL_DATE).to_string())
}

/// Render a date-time as `March 02, 2005 14:30:05`.
pub fn date_time_to_string(date_time: Option<CivilDateTime>) -> Result<String> {
    let date_time = require(date_time, "date_time", "date_time_to_string")?;
    Ok(date_time.as_naive().format(DATE_TIME).to_string())
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a date from text. Absent or empty text is a missing argument;
/// anything else is handed to the engine's parser.
pub fn string_to_date(string_date: Option<&str>) -> Result<CivilDate> {
    let text = require_text(string_date, "string_date", "string_to_date")?;
    Ok(parse_date_text(text.trim())?)
}

/// Parse a date-time from text. A date-only string parses to midnight of
/// that day.
pub fn string_to_date_time(string_date: Option<&str>) -> Result<CivilDateTime> {
    let text = require_text(string_date, "string_date", "string_to_date_time")?;
    Ok(parse_date_time_text(text.trim())?)
}

/// Format chain for dates; the ISO attempt's error is the one reported.
pub(crate) fn parse_date_text(text: &str) -> std::result::Result<CivilDate, chrono::ParseError> {
    match NaiveDate::parse_from_str(text, ISO_DATE) {
        Ok(date) => Ok(CivilDate::from_naive(date)),
        Err(iso_err) => {
            if let Ok(date) = NaiveDate::parse_from_str(text, MONTH_FIRST_DATE) {
                return Ok(CivilDate::from_naive(date));
            }
            if let Ok(date_time) = parse_date_time_text(text) {
                return Ok(date_time.date());
            }
            Err(iso_err)
        }
    }
}

/// Format chain for date-times; date-only forms resolve to midnight.
pub(crate) fn parse_date_time_text(
    text: &str,
) -> std::result::Result<CivilDateTime, chrono::ParseError> {
    match NaiveDateTime::parse_from_str(text, ISO_DATE_TIME) {
        Ok(date_time) => Ok(CivilDateTime::from_naive(date_time)),
        Err(iso_err) => {
            for format in [SPACED_DATE_TIME, MONTH_FIRST_DATE_TIME] {
                if let Ok(date_time) = NaiveDateTime::parse_from_str(text, format) {
                    return Ok(CivilDateTime::from_naive(date_time));
                }
            }
            for format in [ISO_DATE, MONTH_FIRST_DATE] {
                if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                    return Ok(CivilDateTime::from_naive(date.and_time(NaiveTime::MIN)));
                }
            }
            Err(iso_err)
        }
    }
}

// ── Field construction ──────────────────────────────────────────────────────

/// Build a date from its three fields. A `day` past the end of the month is
/// silently clamped to the month's last valid day; that clamp is part of
/// the contract, not a repair.
pub fn format_to_date(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Result<CivilDate> {
    let year = require(year, "year", "format_to_date")?;
    let month = require(month, "month", "format_to_date")?;
    let day = require(day, "day", "format_to_date")?;

    let limit = month_length(year, month).ok_or_else(|| {
        CivilError::InvalidFields(format!("{year}-{month:02} is not a calendar month"))
    })?;
    let day = day.min(limit);

    CivilDate::from_ymd(year, month, day).ok_or_else(|| {
        CivilError::InvalidFields(format!("{year}-{month:02}-{day:02} is not a calendar day"))
    })
}

/// Build a date-time from all six fields. Unlike [`format_to_date`] there
/// is no day clamping: any out-of-range field fails.
pub fn format_to_date_time(
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
) -> Result<CivilDateTime> {
    let year = require(year, "year", "format_to_date_time")?;
    let month = require(month, "month", "format_to_date_time")?;
    let day = require(day, "day", "format_to_date_time")?;
    let hour = require(hour, "hour", "format_to_date_time")?;
    let minute = require(minute, "minute", "format_to_date_time")?;
    let second = require(second, "second", "format_to_date_time")?;

    CivilDateTime::from_ymd_hms(year, month, day, hour, minute, second).ok_or_else(|| {
        CivilError::InvalidFields(format!(
            "{year}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02} is not a calendar date-time"
        ))
    })
}

/// Compose a date-time from the calendar date of `date` and the time-of-day
/// of `time`.
pub fn to_date_time(
    date: Option<CivilDate>,
    time: Option<CivilDateTime>,
) -> Result<CivilDateTime> {
    let date = require(date, "date", "to_date_time")?;
    let time = require(time, "time", "to_date_time")?;
    Ok(date.at(time.time()))
}

// ── Tests ───────────────────────────────────────────────────────────────────
