//! Value types: civil dates, civil date-times, weekday indices, and
//! interval units.
//!
//! Both calendar types are immutable values over chrono's naive (timezone-free)
//! representations. They are always valid Gregorian values — absence is
//! modeled as `Option<CivilDate>` at call boundaries, never as a sentinel
//! inside the type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::convert;

// ── CivilDate ───────────────────────────────────────────────────────────────

/// A calendar day (year, month, day) under the Gregorian calendar, no
/// time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Build a date from its fields. `None` when the fields do not name a
    /// real calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying engine value.
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Attach a time-of-day, producing a date-time on this day.
    pub fn at(self, time: NaiveTime) -> CivilDateTime {
        CivilDateTime(self.0.and_time(time))
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CivilDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        convert::parse_date_text(s.trim())
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ── CivilDateTime ───────────────────────────────────────────────────────────

/// A civil date plus a time-of-day (hour, minute, second), no time zone.
/// Naive local wall-clock semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime(NaiveDateTime);

impl CivilDateTime {
    /// Build a date-time from all six fields. `None` when any field is out
    /// of range for its position.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Self)
    }

    pub const fn from_naive(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    /// The underlying engine value.
    pub const fn as_naive(self) -> NaiveDateTime {
        self.0
    }

    /// The calendar-date component, truncating the time-of-day.
    pub const fn date(self) -> CivilDate {
        CivilDate(self.0.date())
    }

    /// The raw time-of-day component. Note that the `time_part` query
    /// operation applies a 12-hour rollback first; this accessor does not.
    pub const fn time(self) -> NaiveTime {
        self.0.time()
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    fn from(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

impl FromStr for CivilDateTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        convert::parse_date_time_text(s.trim())
    }
}

impl Serialize for CivilDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CivilDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ── Weekday ─────────────────────────────────────────────────────────────────

/// Day of the week, numbered 1 = Sunday through 7 = Saturday.
///
/// The numbering is fixed, not locale-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// The 1..=7 index (1 = Sunday).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Decode a 1..=7 index (1 = Sunday). `None` outside that range.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Sunday),
            2 => Some(Self::Monday),
            3 => Some(Self::Tuesday),
            4 => Some(Self::Wednesday),
            5 => Some(Self::Thursday),
            6 => Some(Self::Friday),
            7 => Some(Self::Saturday),
            _ => None,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

// ── IntervalUnit ────────────────────────────────────────────────────────────

/// A named granularity for calendar-aware addition.
///
/// Units are selected by a short string code decoded once at the boundary:
/// `"yyyy"`, `"m"`, `"d"`, `"h"`, `"n"` (minute), `"s"`. An unrecognized
/// code is **not** an error — the arithmetic operations return their input
/// unchanged for it. That branch is intentional, documented behavior, not a
/// silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl IntervalUnit {
    /// Decode a short interval code. `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "yyyy" => Some(Self::Year),
            "m" => Some(Self::Month),
            "d" => Some(Self::Day),
            "h" => Some(Self::Hour),
            "n" => Some(Self::Minute),
            "s" => Some(Self::Second),
            _ => None,
        }
    }

    /// The short code this unit is selected by.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Year => "yyyy",
            Self::Month => "m",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "n",
            Self::Second => "s",
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
