// Property-based tests for the date selector
// Checks rule and grid invariants over random dates

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use meal_calendar::models::calendar_day::{Granularity, NavDirection};
use meal_calendar::models::date_rule::DateRangeRule;
use meal_calendar::models::settings::CalendarSettings;
use meal_calendar::services::calendar::{
    is_date_disabled, period_bounds, CalendarDateSelector, FixedClock,
};
use meal_calendar::utils::date::days_in_month;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Any day between 2000 and roughly 2099
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..36_500).prop_map(|n| base() + Duration::days(n))
}

fn any_rule() -> impl Strategy<Value = DateRangeRule> {
    (
        proptest::option::of(any_date()),
        proptest::option::of(any_date()),
        any::<bool>(),
    )
        .prop_map(|(min_date, max_date, allow_future_dates)| DateRangeRule {
            min_date,
            max_date,
            allow_future_dates,
        })
}

proptest! {
    /// Property: everything before min_date is disabled
    #[test]
    fn prop_before_min_is_disabled(
        min in any_date(),
        today in any_date(),
        back in 1i64..1000,
        allow_future in any::<bool>(),
    ) {
        let rule = DateRangeRule::new(allow_future).with_min_date(min);
        prop_assert!(is_date_disabled(min - Duration::days(back), &rule, today));
    }

    /// Property: everything after max_date is disabled
    #[test]
    fn prop_after_max_is_disabled(
        max in any_date(),
        today in any_date(),
        ahead in 1i64..1000,
    ) {
        let rule = DateRangeRule::new(true).with_min_date(base()).with_max_date(max);
        prop_assert!(is_date_disabled(max + Duration::days(ahead), &rule, today));
    }

    /// Property: future days are disabled exactly when the rule forbids them
    #[test]
    fn prop_future_gate(today in any_date(), ahead in 1i64..1000) {
        let future = today + Duration::days(ahead);
        let closed = DateRangeRule::new(false).with_min_date(base());
        let open = DateRangeRule::new(true).with_min_date(base());
        prop_assert!(is_date_disabled(future, &closed, today));
        prop_assert!(!is_date_disabled(future, &open, today));
    }

    /// Property: selecting a disabled day never changes state
    #[test]
    fn prop_disabled_selection_is_noop(
        rule in any_rule(),
        today in any_date(),
        first in any_date(),
        second in any_date(),
    ) {
        let mut selector =
            CalendarDateSelector::new(rule, CalendarSettings::default(), FixedClock(today));
        selector.open(None);
        selector.select_date(first);
        let before = *selector.state();

        let accepted = selector.select_date(second);
        if is_date_disabled(second, &rule, today) {
            prop_assert!(!accepted);
            prop_assert_eq!(*selector.state(), before);
        } else {
            prop_assert!(accepted);
            prop_assert_eq!(selector.selected(), Some(second));
        }
    }

    /// Property: month grids are whole weeks holding exactly the month's days
    #[test]
    fn prop_month_grid_shape(rule in any_rule(), today in any_date(), anchor in any_date()) {
        let selector =
            CalendarDateSelector::new(rule, CalendarSettings::default(), FixedClock(today));
        let cells: Vec<_> = selector
            .compute_visible_days(Some(anchor), Granularity::Month)
            .collect();
        prop_assert_eq!(cells.len() % 7, 0);

        let days: Vec<NaiveDate> = cells.iter().filter_map(|c| c.date()).collect();
        let expected: Vec<NaiveDate> = (1..=days_in_month(anchor.year(), anchor.month()))
            .filter_map(|d| NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), d))
            .collect();
        prop_assert_eq!(days, expected);

        // Leading padding lines day 1 up with its Sunday-first column
        let leading = cells.iter().take_while(|c| c.is_placeholder()).count();
        let first = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1).unwrap();
        prop_assert_eq!(leading as u32, first.weekday().num_days_from_sunday());
    }

    /// Property: week strips are seven days starting on a Monday
    #[test]
    fn prop_week_strip_shape(today in any_date(), anchor in any_date()) {
        let selector = CalendarDateSelector::new(
            DateRangeRule::new(true),
            CalendarSettings::default(),
            FixedClock(today),
        );
        let days: Vec<NaiveDate> = selector
            .compute_visible_days(Some(anchor), Granularity::Week)
            .filter_map(|c| c.date())
            .collect();
        prop_assert_eq!(days.len(), 7);
        prop_assert_eq!(days[0].weekday(), Weekday::Mon);
        prop_assert!(days[0] <= anchor && anchor <= days[6]);
    }

    /// Property: no rendered day is both disabled and selected
    #[test]
    fn prop_disabled_never_selected(
        rule in any_rule(),
        today in any_date(),
        pick in any_date(),
        granularity in prop_oneof![Just(Granularity::Month), Just(Granularity::Week)],
    ) {
        let mut selector =
            CalendarDateSelector::new(rule, CalendarSettings::default(), FixedClock(today));
        selector.set_granularity(granularity);
        selector.open(Some(pick));
        selector.select_date(pick);

        for cell in selector.visible_days() {
            if let Some(day) = cell.day() {
                prop_assert!(!(day.is_disabled && day.is_selected));
            }
        }
    }

    /// Property: navigation never lands before the current period and never
    /// opens a period past the last enabled day
    #[test]
    fn prop_navigation_respects_bounds(
        rule in any_rule(),
        today in any_date(),
        steps in proptest::collection::vec(any::<bool>(), 0..40),
        weekly in any::<bool>(),
    ) {
        let layout = CalendarSettings::default();
        let granularity = if weekly { Granularity::Week } else { Granularity::Month };
        let mut selector = CalendarDateSelector::new(rule, layout.clone(), FixedClock(today));
        selector.set_granularity(granularity);
        selector.open(None);
        let (current_start, _) = period_bounds(today, granularity, &layout);

        for forward in steps {
            let direction = if forward { NavDirection::Next } else { NavDirection::Previous };
            let before = selector.anchor();
            let moved = match granularity {
                Granularity::Month => selector.navigate_month(direction),
                Granularity::Week => selector.navigate_week(direction),
            };
            if !moved {
                prop_assert_eq!(selector.anchor(), before);
                continue;
            }
            let (start, _) = period_bounds(selector.anchor(), granularity, &layout);
            prop_assert!(start >= current_start);
            if forward {
                if let Some(last) = rule.effective_max(today) {
                    prop_assert!(start <= last);
                }
            }
        }
    }
}
