use crate::core::types::DateKey;
use crate::extensions::chrono::WeekdayExt;
use chrono::{Datelike, Duration, NaiveDate};

/// Monday on or before `date` (ISO week start), used by week-view layouts.
pub fn start_of_display_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(back)
}

/// The 7 dates of the display week containing `date`, Monday first.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let start = start_of_display_week(date);
    (0..7).map(|offset| start + Duration::days(offset)).collect()
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day count for the month, leap-year correct. Out-of-range months have no
/// days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Weekday index of the 1st of the month, 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().to_day_of_week().grid_index())
        .unwrap_or(0)
}

/// Canonical `YYYY-MM-DD` key from local date components. Load-bearing:
/// formatting via a UTC timestamp split instead silently shifts dates near
/// midnight in non-UTC timezones.
pub fn canonical_key(date: NaiveDate) -> DateKey {
    DateKey::from_date(date)
}
