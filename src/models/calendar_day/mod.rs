// Calendar day module
// Render-ready cells produced by the date selector

use chrono::NaiveDate;

/// Whether the selector renders a month grid or a single week strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Month,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// A single candidate day with its derived display flags.
///
/// Recomputed whenever the visible period or the selection changes; never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_past: bool,
    pub is_future: bool,
    pub is_disabled: bool,
    pub is_selected: bool,
}

impl CalendarDay {
    /// Derive the flags for `date`. A disabled day is never reported as
    /// selected, whatever `selected` holds.
    pub fn new(
        date: NaiveDate,
        today: NaiveDate,
        is_disabled: bool,
        selected: Option<NaiveDate>,
    ) -> Self {
        Self {
            date,
            is_today: date == today,
            is_past: date < today,
            is_future: date > today,
            is_disabled,
            is_selected: !is_disabled && selected == Some(date),
        }
    }

    pub fn is_selectable(&self) -> bool {
        !self.is_disabled
    }
}

/// One slot of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding that aligns the first day of a month to its weekday column.
    Placeholder,
    Day(CalendarDay),
}

impl CalendarCell {
    pub fn day(&self) -> Option<&CalendarDay> {
        match self {
            CalendarCell::Placeholder => None,
            CalendarCell::Day(day) => Some(day),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.day().map(|day| day.date)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CalendarCell::Placeholder)
    }

    /// Placeholders are never selectable and never styled as disabled.
    pub fn is_selectable(&self) -> bool {
        self.day().is_some_and(CalendarDay::is_selectable)
    }
}
