use super::{chrono::WeekdayExt, enums::valid_csv};
use crate::core::types::{DayOfWeek, MonthNav};
use chrono::Weekday;

#[test]
fn weekday_ext_maps_to_grid_enum() {
    let pairs = [
        (Weekday::Sun, DayOfWeek::Sun),
        (Weekday::Mon, DayOfWeek::Mon),
        (Weekday::Tue, DayOfWeek::Tue),
        (Weekday::Wed, DayOfWeek::Wed),
        (Weekday::Thu, DayOfWeek::Thu),
        (Weekday::Fri, DayOfWeek::Fri),
        (Weekday::Sat, DayOfWeek::Sat),
    ];
    for (weekday, expected) in pairs {
        assert_eq!(weekday.to_day_of_week(), expected);
    }
}

#[test]
fn grid_index_is_sunday_first() {
    assert_eq!(DayOfWeek::Sun.grid_index(), 0);
    assert_eq!(DayOfWeek::Wed.grid_index(), 3);
    assert_eq!(DayOfWeek::Sat.grid_index(), 6);
}

#[test]
fn valid_csv_lists_enum_values() {
    let csv = valid_csv::<MonthNav>();
    assert!(csv.contains("prev"));
    assert!(csv.contains("next"));
}
