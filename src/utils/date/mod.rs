// Date utility functions
// Calendar arithmetic shared by the selector and the CLI

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};

use crate::models::settings::WeekStart;

/// Truncate a wall-clock timestamp to its local calendar day.
pub fn local_day<Tz: TimeZone>(moment: &DateTime<Tz>) -> NaiveDate {
    moment.with_timezone(&Local).date_naive()
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let days = days_in_month(date.year(), date.month());
    date.with_day(days).unwrap_or(date)
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // December never needs the next year, which may not be representable.
    if month == 12 {
        return 31;
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Shift a date by the given number of months, clamping the day to the
/// length of the target month (Jan 31 + 1 month = Feb 28/29). `None` when the
/// target month is outside chrono's range.
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let total_months = (date.year() * 12)
        .checked_add(date.month() as i32 - 1)?
        .checked_add(delta)?;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month);
    let day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, day)
}

/// Calculate the start of the week containing the given date. Clamped to
/// `NaiveDate::MIN` for the first representable week.
pub fn week_start(date: NaiveDate, first_day: WeekStart) -> NaiveDate {
    date.checked_sub_signed(Duration::days(i64::from(days_from_week_start(date, first_day))))
        .unwrap_or(NaiveDate::MIN)
}

/// Column index (0..7) of `date` in a row that begins on `first_day`.
pub fn days_from_week_start(date: NaiveDate, first_day: WeekStart) -> u32 {
    match first_day {
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        WeekStart::Monday => date.weekday().num_days_from_monday(),
    }
}

/// Parse a `YYYY-MM-DD` date as typed on the command line.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
}
