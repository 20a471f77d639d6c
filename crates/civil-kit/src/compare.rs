//! Comparison group: strict ordering and equality over dates and
//! date-times.
//!
//! Date comparisons operate on [`CivilDate`] only; a caller holding a
//! [`CivilDateTime`] truncates explicitly with [`CivilDateTime::date`], so
//! date equality can never be perturbed by a time-of-day component.

use crate::error::Result;
use crate::types::{CivilDate, CivilDateTime};
use crate::validate::require;

/// True iff `initial_date` is strictly after `final_date`.
pub fn date_after(initial_date: Option<CivilDate>, final_date: Option<CivilDate>) -> Result<bool> {
    let initial_date = require(initial_date, "initial_date", "date_after")?;
    let final_date = require(final_date, "final_date", "date_after")?;
    Ok(initial_date > final_date)
}

/// True iff `initial_date` is strictly before `final_date`.
pub fn date_before(initial_date: Option<CivilDate>, final_date: Option<CivilDate>) -> Result<bool> {
    let initial_date = require(initial_date, "initial_date", "date_before")?;
    let final_date = require(final_date, "final_date", "date_before")?;
    Ok(initial_date < final_date)
}

/// True iff both arguments name the same calendar day.
pub fn date_equals(initial_date: Option<CivilDate>, final_date: Option<CivilDate>) -> Result<bool> {
    let initial_date = require(initial_date, "initial_date", "date_equals")?;
    let final_date = require(final_date, "final_date", "date_equals")?;
    Ok(initial_date == final_date)
}

/// True iff `initial_date_time` is strictly after `final_date_time`.
pub fn date_time_after(
    initial_date_time: Option<CivilDateTime>,
    final_date_time: Option<CivilDateTime>,
) -> Result<bool> {
    let initial_date_time = require(initial_date_time, "initial_date_time", "date_time_after")?;
    let final_date_time = require(final_date_time, "final_date_time", "date_time_after")?;
    Ok(initial_date_time > final_date_time)
}

/// True iff `initial_date_time` is strictly before `final_date_time`.
pub fn date_time_before(
    initial_date_time: Option<CivilDateTime>,
    final_date_time: Option<CivilDateTime>,
) -> Result<bool> {
    let initial_date_time = require(initial_date_time, "initial_date_time", "date_time_before")?;
    let final_date_time = require(final_date_time, "final_date_time", "date_time_before")?;
    Ok(initial_date_time < final_date_time)
}

/// True iff both arguments name the same instant, time-of-day included.
pub fn date_time_equals(
    initial_date_time: Option<CivilDateTime>,
    final_date_time: Option<CivilDateTime>,
) -> Result<bool> {
    let initial_date_time = require(initial_date_time, "initial_date_time", "date_time_equals")?;
    let final_date_time = require(final_date_time, "final_date_time", "date_time_equals")?;
    Ok(initial_date_time == final_date_time)
}

// ── Tests ───────────────────────────────────────────────────────────────────
