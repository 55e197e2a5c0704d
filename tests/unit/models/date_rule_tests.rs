// Parameterized tests for DateRangeRule
// Table of the planning scenarios used by the meal-plan and stats pickers

use chrono::NaiveDate;
use test_case::test_case;

use meal_calendar::models::capabilities::{Capabilities, Tier};
use meal_calendar::models::date_rule::{DateRangeRule, DisabledReason};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    ymd(2024, 6, 10)
}

fn rule_for(tier: Tier) -> DateRangeRule {
    DateRangeRule::from_capabilities(&Capabilities::for_tier(tier)).with_min_date(ymd(2024, 6, 1))
}

#[test_case(Tier::Free, ymd(2024, 6, 5), None; "free past day after min is allowed")]
#[test_case(Tier::Free, ymd(2024, 6, 15), Some(DisabledReason::FutureNotAllowed); "free future day is blocked")]
#[test_case(Tier::Free, ymd(2024, 6, 10), None; "free today is allowed")]
#[test_case(Tier::Free, ymd(2024, 5, 31), Some(DisabledReason::BeforeMin); "free day before min is blocked")]
#[test_case(Tier::Pro, ymd(2024, 6, 20), None; "pro future day is allowed")]
#[test_case(Tier::Pro, ymd(2024, 5, 31), Some(DisabledReason::BeforeMin); "pro day before min is blocked")]
fn test_planning_scenarios(tier: Tier, date: NaiveDate, expected: Option<DisabledReason>) {
    let rule = rule_for(tier);
    assert_eq!(rule.disabled_reason(date, today()), expected);
    assert_eq!(rule.is_disabled(date, today()), expected.is_some());
}

#[test_case(None, ymd(2024, 6, 9), true; "default min blocks yesterday")]
#[test_case(None, ymd(2024, 6, 10), false; "default min allows today")]
#[test_case(Some(ymd(2024, 1, 1)), ymd(2024, 6, 9), false; "explicit min opens the past")]
fn test_min_date_default(min: Option<NaiveDate>, date: NaiveDate, disabled: bool) {
    let rule = DateRangeRule {
        min_date: min,
        max_date: None,
        allow_future_dates: true,
    };
    assert_eq!(rule.is_disabled(date, today()), disabled);
}

#[test]
fn test_reason_messages_are_readable() {
    assert_eq!(
        DisabledReason::FutureNotAllowed.to_string(),
        "future dates need a Pro account"
    );
}
