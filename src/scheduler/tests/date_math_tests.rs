use crate::scheduler::date_math::{
    canonical_key, days_in_month, first_weekday_of_month, is_leap_year, start_of_display_week,
    week_dates,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn start_of_display_week_is_monday_on_or_before() {
    // 2024-03-05 is a Tuesday.
    assert_eq!(start_of_display_week(date(2024, 3, 5)), date(2024, 3, 4));
    // A Monday maps to itself.
    assert_eq!(start_of_display_week(date(2024, 3, 4)), date(2024, 3, 4));
    // A Sunday belongs to the week started six days earlier.
    assert_eq!(start_of_display_week(date(2024, 3, 10)), date(2024, 3, 4));
}

#[test]
fn week_dates_span_monday_through_sunday() {
    let week = week_dates(date(2024, 3, 5));
    assert_eq!(week.len(), 7);
    assert_eq!(week[0], date(2024, 3, 4));
    assert_eq!(week[6], date(2024, 3, 10));
}

#[test]
fn week_dates_cross_month_boundaries() {
    // 2024-04-01 is a Monday; the prior Sunday is in March.
    let week = week_dates(date(2024, 3, 31));
    assert_eq!(week[0], date(2024, 3, 25));
    assert_eq!(week[6], date(2024, 3, 31));
}

#[test]
fn leap_years_follow_gregorian_rules() {
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
}

#[test]
fn days_in_month_is_leap_year_correct() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2024, 1), 31);
    assert_eq!(days_in_month(2024, 4), 30);
    assert_eq!(days_in_month(2024, 12), 31);
    assert_eq!(days_in_month(2024, 13), 0);
}

#[test]
fn first_weekday_of_month_is_sunday_indexed() {
    // 2024-03-01 is a Friday.
    assert_eq!(first_weekday_of_month(2024, 3), 5);
    // 2024-09-01 is a Sunday.
    assert_eq!(first_weekday_of_month(2024, 9), 0);
    // 2024-02-01 is a Thursday.
    assert_eq!(first_weekday_of_month(2024, 2), 4);
}

#[test]
fn canonical_key_uses_zero_padded_local_components() {
    // Local construction (2024, March, 5) must always yield 2024-03-05,
    // whatever the process timezone is.
    let key = canonical_key(date(2024, 3, 5));
    assert_eq!(key.to_string(), "2024-03-05");

    let key = canonical_key(date(2024, 11, 30));
    assert_eq!(key.to_string(), "2024-11-30");
}
