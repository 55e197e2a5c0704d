// Test fixtures - reusable test data
// Provides consistent dates, rules and sessions across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use meal_calendar::models::capabilities::{Capabilities, Tier};
use meal_calendar::models::date_rule::DateRangeRule;
use meal_calendar::models::session::{Session, UserProfile};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// "Today" used by the planning scenarios: Monday, June 10 2024
    pub fn today() -> NaiveDate {
        ymd(2024, 6, 10)
    }

    /// Earliest plannable day in the scenarios
    pub fn june_1_2024() -> NaiveDate {
        ymd(2024, 6, 1)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample rules and sessions
pub mod accounts {
    use super::*;

    pub fn free_rule() -> DateRangeRule {
        DateRangeRule::from_capabilities(&Capabilities::for_tier(Tier::Free))
            .with_min_date(dates::june_1_2024())
    }

    pub fn pro_rule() -> DateRangeRule {
        DateRangeRule::from_capabilities(&Capabilities::for_tier(Tier::Pro))
            .with_min_date(dates::june_1_2024())
    }

    pub fn pro_session() -> Session {
        let mut session = Session::default();
        session.login(
            "pro-token",
            UserProfile::new("1001", "Jordan", "jordan@example.com", Tier::Pro),
        );
        session
    }

    pub fn free_session() -> Session {
        let mut session = Session::default();
        session.login(
            "free-token",
            UserProfile::new("1002", "Casey", "casey@example.com", Tier::Free),
        );
        session
    }
}
