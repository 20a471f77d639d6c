//! Injected clock capability for the query group.
//!
//! The current-date/current-date-time operations are the only ones that
//! touch the environment. They take the clock as an explicit argument, so
//! tests pin "now" with [`FixedClock`] instead of depending on wall-clock
//! time.

use chrono::Local;

use crate::types::CivilDateTime;

/// A readable source of "now" with naive local wall-clock semantics.
pub trait Clock {
    fn now(&self) -> CivilDateTime;
}

/// Reads the operating system clock via `chrono::Local`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> CivilDateTime {
        CivilDateTime::from_naive(Local::now().naive_local())
    }
}

/// A clock pinned to a single instant. Intended for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CivilDateTime);

impl Clock for FixedClock {
    fn now(&self) -> CivilDateTime {
        self.0
    }
}
