//! Source of "today" for the date selector.
//!
//! Day boundaries follow the device's local midnight. Nothing is normalized
//! against server time.

use chrono::{Local, NaiveDate};

use crate::utils::date::local_day;

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current calendar day, truncated to local midnight.
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the device's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        local_day(&Local::now())
    }
}

/// Clock pinned to a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
