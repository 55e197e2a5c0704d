// Selection module
// Per-picker state: highlighted day and visible period

use chrono::NaiveDate;

use super::calendar_day::Granularity;

/// Owned by a single selector instance and reset every time it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<NaiveDate>,
    pub anchor: NaiveDate,
    pub granularity: Granularity,
}

impl SelectionState {
    pub fn new(anchor: NaiveDate, granularity: Granularity) -> Self {
        Self {
            selected: None,
            anchor,
            granularity,
        }
    }

    /// Drop the highlighted day and move back to `anchor`.
    pub fn reset(&mut self, anchor: NaiveDate) {
        self.selected = None;
        self.anchor = anchor;
    }
}
