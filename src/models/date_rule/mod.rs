// Date rule module
// Availability policy applied to every candidate day

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::models::capabilities::Capabilities;

/// Why a day cannot be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    BeforeMin,
    AfterMax,
    FutureNotAllowed,
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisabledReason::BeforeMin => write!(f, "before the earliest allowed date"),
            DisabledReason::AfterMax => write!(f, "after the latest allowed date"),
            DisabledReason::FutureNotAllowed => write!(f, "future dates need a Pro account"),
        }
    }
}

/// A caller-supplied range that no day can satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("earliest date {min} is after latest date {max}")]
    MinAfterMax { min: NaiveDate, max: NaiveDate },
}

/// Which days the caller allows the user to pick.
///
/// `min_date` falls back to today when unset, so past days are disabled by
/// default but can be opened up by passing an earlier bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRangeRule {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub allow_future_dates: bool,
}

impl DateRangeRule {
    pub fn new(allow_future_dates: bool) -> Self {
        Self {
            min_date: None,
            max_date: None,
            allow_future_dates,
        }
    }

    /// Rule for the account's resolved capabilities.
    pub fn from_capabilities(capabilities: &Capabilities) -> Self {
        Self::new(capabilities.can_view_future_dates)
    }

    /// Rule for the account's capabilities narrowed to an explicit range.
    /// Either bound may be left open; an inverted range is rejected.
    pub fn for_range(
        capabilities: &Capabilities,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Result<Self, RuleError> {
        if let (Some(min), Some(max)) = (min_date, max_date) {
            if min > max {
                return Err(RuleError::MinAfterMax { min, max });
            }
        }
        Ok(Self {
            min_date,
            max_date,
            ..Self::from_capabilities(capabilities)
        })
    }

    pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    pub fn with_max_date(mut self, max_date: NaiveDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    /// Lower bound, resolved against the caller's notion of today.
    pub fn effective_min(&self, today: NaiveDate) -> NaiveDate {
        self.min_date.unwrap_or(today)
    }

    /// Latest day that can be enabled, combining `max_date` with the
    /// future-date gate.
    pub fn effective_max(&self, today: NaiveDate) -> Option<NaiveDate> {
        match (self.max_date, self.allow_future_dates) {
            (Some(max), true) => Some(max),
            (Some(max), false) => Some(max.min(today)),
            (None, true) => None,
            (None, false) => Some(today),
        }
    }

    /// First rule `date` breaks, checked in min, max, future order.
    pub fn disabled_reason(&self, date: NaiveDate, today: NaiveDate) -> Option<DisabledReason> {
        if date < self.effective_min(today) {
            Some(DisabledReason::BeforeMin)
        } else if self.max_date.is_some_and(|max| date > max) {
            Some(DisabledReason::AfterMax)
        } else if !self.allow_future_dates && date > today {
            Some(DisabledReason::FutureNotAllowed)
        } else {
            None
        }
    }

    pub fn is_disabled(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.disabled_reason(date, today).is_some()
    }
}
