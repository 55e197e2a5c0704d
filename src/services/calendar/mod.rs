//! Date selector behind the meal-planning and nutrition-stats pickers.
//!
//! The selector owns its [`SelectionState`] and applies a caller-supplied
//! [`DateRangeRule`] to every candidate day. Every operation is synchronous
//! and total: disabled selections are ignored and navigation past an allowed
//! boundary is clamped, so nothing here returns an error.

mod clock;
mod visible_days;

pub use clock::{Clock, FixedClock, SystemClock};
pub use visible_days::{period_bounds, VisibleDays};

#[cfg(test)]
pub use clock::MockClock;

use chrono::{Duration, NaiveDate};

use crate::models::calendar_day::{Granularity, NavDirection};
use crate::models::date_rule::DateRangeRule;
use crate::models::selection::SelectionState;
use crate::models::settings::CalendarSettings;
use crate::utils::date::shift_month;

/// Whether `date` falls outside `rule` when the current day is `today`.
pub fn is_date_disabled(date: NaiveDate, rule: &DateRangeRule, today: NaiveDate) -> bool {
    rule.is_disabled(date, today)
}

/// Receives the outcome of a picker session.
#[cfg_attr(test, mockall::automock)]
pub trait PickerListener {
    /// The user confirmed `date`.
    fn on_select(&mut self, date: NaiveDate);
    /// The picker closed without a date.
    fn on_close(&mut self);
}

/// [`PickerListener`] backed by two closures.
pub struct CallbackListener<S, C>
where
    S: FnMut(NaiveDate),
    C: FnMut(),
{
    on_select: S,
    on_close: C,
}

impl<S, C> CallbackListener<S, C>
where
    S: FnMut(NaiveDate),
    C: FnMut(),
{
    pub fn new(on_select: S, on_close: C) -> Self {
        Self { on_select, on_close }
    }
}

impl<S, C> PickerListener for CallbackListener<S, C>
where
    S: FnMut(NaiveDate),
    C: FnMut(),
{
    fn on_select(&mut self, date: NaiveDate) {
        (self.on_select)(date);
    }

    fn on_close(&mut self) {
        (self.on_close)();
    }
}

#[derive(Debug, Clone)]
pub struct CalendarDateSelector<C: Clock = SystemClock> {
    rule: DateRangeRule,
    layout: CalendarSettings,
    clock: C,
    state: SelectionState,
    is_open: bool,
}

impl CalendarDateSelector<SystemClock> {
    pub fn with_system_clock(rule: DateRangeRule, layout: CalendarSettings) -> Self {
        Self::new(rule, layout, SystemClock)
    }
}

impl<C: Clock> CalendarDateSelector<C> {
    /// Create a closed selector anchored on today's month.
    pub fn new(rule: DateRangeRule, layout: CalendarSettings, clock: C) -> Self {
        let today = clock.today();
        Self {
            rule,
            layout,
            clock,
            state: SelectionState::new(today, Granularity::Month),
            is_open: false,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn rule(&self) -> &DateRangeRule {
        &self.rule
    }

    pub fn layout(&self) -> &CalendarSettings {
        &self.layout
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.state.selected
    }

    pub fn anchor(&self) -> NaiveDate {
        self.state.anchor
    }

    pub fn granularity(&self) -> Granularity {
        self.state.granularity
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Replace the rule, dropping a selection the new rule disables.
    pub fn set_rule(&mut self, rule: DateRangeRule) {
        self.rule = rule;
        if self.state.selected.is_some_and(|d| self.is_date_disabled(d)) {
            self.state.selected = None;
        }
    }

    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.state.granularity = granularity;
    }

    /// The picker became visible: selection is cleared and the view moves to
    /// `anchor`, or to today when none is given.
    pub fn open(&mut self, anchor: Option<NaiveDate>) {
        let anchor = anchor.unwrap_or_else(|| self.today());
        self.state.reset(anchor);
        self.is_open = true;
    }

    /// Cells for the period around `anchor`. A missing anchor means today.
    pub fn compute_visible_days(
        &self,
        anchor: Option<NaiveDate>,
        granularity: Granularity,
    ) -> VisibleDays {
        let today = self.today();
        VisibleDays::new(
            anchor.unwrap_or(today),
            granularity,
            &self.layout,
            self.rule,
            today,
            self.state.selected,
        )
    }

    /// Cells for the period currently on screen.
    pub fn visible_days(&self) -> VisibleDays {
        self.compute_visible_days(Some(self.state.anchor), self.state.granularity)
    }

    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        is_date_disabled(date, &self.rule, self.today())
    }

    /// Highlight `date` unless the rule disables it. Returns whether the
    /// selection changed hands to `date`.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if self.is_date_disabled(date) {
            return false;
        }
        self.state.selected = Some(date);
        true
    }

    pub fn clear_selection(&mut self) {
        self.state.selected = None;
    }

    pub fn can_navigate_next(&self) -> bool {
        self.can_navigate(NavDirection::Next, self.state.granularity)
    }

    pub fn can_navigate_previous(&self) -> bool {
        self.can_navigate(NavDirection::Previous, self.state.granularity)
    }

    /// Evaluate the period one step away from the current anchor.
    ///
    /// Forward moves are refused when the whole next period lies past the
    /// last day the rule can enable. Backward moves are refused when the
    /// previous period starts before today's period or ends before the
    /// rule's lower bound. A period chrono cannot represent is never
    /// reachable.
    pub fn can_navigate(&self, direction: NavDirection, granularity: Granularity) -> bool {
        let today = self.today();
        let Some(target) = shifted_anchor(self.state.anchor, direction, granularity) else {
            return false;
        };
        let (start, end) = period_bounds(target, granularity, &self.layout);

        match direction {
            NavDirection::Next => self
                .rule
                .effective_max(today)
                .map_or(true, |last| start <= last),
            NavDirection::Previous => {
                let (current_start, _) = period_bounds(today, granularity, &self.layout);
                start >= current_start && end >= self.rule.effective_min(today)
            }
        }
    }

    /// Move one calendar month. Returns false and leaves the anchor alone
    /// when the move is blocked.
    pub fn navigate_month(&mut self, direction: NavDirection) -> bool {
        self.navigate(direction, Granularity::Month)
    }

    /// Move seven days. Returns false and leaves the anchor alone when the
    /// move is blocked.
    pub fn navigate_week(&mut self, direction: NavDirection) -> bool {
        self.navigate(direction, Granularity::Week)
    }

    /// Move `steps` periods, backward when negative, stopping at the first
    /// blocked move. Returns how many moves were made.
    pub fn navigate_by(&mut self, granularity: Granularity, steps: i32) -> u32 {
        let direction = if steps < 0 {
            NavDirection::Previous
        } else {
            NavDirection::Next
        };
        let mut moved = 0;
        while moved < steps.unsigned_abs() && self.navigate(direction, granularity) {
            moved += 1;
        }
        moved
    }

    fn navigate(&mut self, direction: NavDirection, granularity: Granularity) -> bool {
        if !self.can_navigate(direction, granularity) {
            return false;
        }
        match shifted_anchor(self.state.anchor, direction, granularity) {
            Some(target) => {
                self.state.anchor = target;
                true
            }
            None => false,
        }
    }

    /// Hand the current selection to `listener` and close the picker.
    ///
    /// A selection the rule no longer allows (for example after the day
    /// rolled over) is reported as no selection.
    pub fn confirm_selection(&mut self, listener: &mut dyn PickerListener) -> Option<NaiveDate> {
        let selected = self
            .state
            .selected
            .filter(|date| !self.is_date_disabled(*date));

        match selected {
            Some(date) => listener.on_select(date),
            None => listener.on_close(),
        }
        self.is_open = false;
        selected
    }

    /// Close without a date.
    pub fn cancel(&mut self, listener: &mut dyn PickerListener) {
        listener.on_close();
        self.is_open = false;
    }
}

fn shifted_anchor(
    anchor: NaiveDate,
    direction: NavDirection,
    granularity: Granularity,
) -> Option<NaiveDate> {
    let step: i32 = match direction {
        NavDirection::Previous => -1,
        NavDirection::Next => 1,
    };
    match granularity {
        Granularity::Month => shift_month(anchor, step),
        Granularity::Week => anchor.checked_add_signed(Duration::days(7 * i64::from(step))),
    }
}
