//! Lazy generation of the cells shown for one month or one week.

use chrono::{Datelike, Duration, NaiveDate};
use std::iter::FusedIterator;

use crate::models::calendar_day::{CalendarCell, CalendarDay, Granularity};
use crate::models::date_rule::DateRangeRule;
use crate::models::settings::CalendarSettings;
use crate::utils::date::{
    days_from_week_start, days_in_month, first_of_month, last_of_month, week_start,
};

/// First and last real day of the period containing `anchor`.
pub fn period_bounds(
    anchor: NaiveDate,
    granularity: Granularity,
    layout: &CalendarSettings,
) -> (NaiveDate, NaiveDate) {
    match granularity {
        Granularity::Month => (first_of_month(anchor), last_of_month(anchor)),
        Granularity::Week => {
            let start = week_start(anchor, layout.week_view_start);
            let end = start
                .checked_add_signed(Duration::days(6))
                .unwrap_or(NaiveDate::MAX);
            (start, end)
        }
    }
}

/// Iterator over the grid cells of one period.
///
/// Month grids are padded with placeholders before the first day and after
/// the last day so the length is always a multiple of 7. Week strips are
/// exactly 7 real days. Cells are derived on demand from the inputs captured
/// at construction.
#[derive(Debug, Clone)]
pub struct VisibleDays {
    first_day: NaiveDate,
    leading: u32,
    day_count: u32,
    total: u32,
    index: u32,
    today: NaiveDate,
    rule: DateRangeRule,
    selected: Option<NaiveDate>,
}

impl VisibleDays {
    pub fn new(
        anchor: NaiveDate,
        granularity: Granularity,
        layout: &CalendarSettings,
        rule: DateRangeRule,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Self {
        let (first_day, leading, day_count) = match granularity {
            Granularity::Month => {
                let first = first_of_month(anchor);
                (
                    first,
                    days_from_week_start(first, layout.month_week_start),
                    days_in_month(first.year(), first.month()),
                )
            }
            Granularity::Week => {
                // Days of the strip that fall outside chrono's range become
                // placeholders so the columns keep their weekday.
                let start = week_start(anchor, layout.week_view_start);
                let clipped = days_from_week_start(anchor, layout.week_view_start)
                    - days_between(start, anchor);
                let until_max = days_between(start, NaiveDate::MAX).saturating_add(1);
                (start, clipped, (7 - clipped).min(until_max))
            }
        };
        let total = (leading + day_count).div_ceil(7) * 7;

        Self {
            first_day,
            leading,
            day_count,
            total,
            index: 0,
            today,
            rule,
            selected,
        }
    }

    fn cell_at(&self, index: u32) -> CalendarCell {
        if index < self.leading || index >= self.leading + self.day_count {
            return CalendarCell::Placeholder;
        }
        let offset = Duration::days(i64::from(index - self.leading));
        let Some(date) = self.first_day.checked_add_signed(offset) else {
            return CalendarCell::Placeholder;
        };
        CalendarCell::Day(CalendarDay::new(
            date,
            self.today,
            self.rule.is_disabled(date, self.today),
            self.selected,
        ))
    }
}

fn days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    u32::try_from(to.signed_duration_since(from).num_days()).unwrap_or(u32::MAX)
}

impl Iterator for VisibleDays {
    type Item = CalendarCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let cell = self.cell_at(self.index);
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VisibleDays {}

impl FusedIterator for VisibleDays {}
