use crate::core::models::Task;
use crate::core::types::{DateKey, DayOfWeek, MonthRef};
use crate::scheduler::date_math;
use chrono::NaiveDate;
use strum::IntoEnumIterator;

/// One slot of the month grid. Ephemeral; recomputed on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell<'a> {
    /// 1..=N for in-month slots, None for leading/trailing padding.
    pub day_number: Option<u32>,
    pub date: Option<DateKey>,
    pub in_current_month: bool,
    pub selected: bool,
    /// Tasks due this day, in store iteration order (no time sort).
    pub tasks: Vec<&'a Task>,
}

impl CalendarCell<'_> {
    fn padding() -> Self {
        CalendarCell {
            day_number: None,
            date: None,
            in_current_month: false,
            selected: false,
            tasks: Vec::new(),
        }
    }
}

/// Header row labels, Sunday first.
pub fn weekday_labels() -> Vec<String> {
    DayOfWeek::iter().map(|d| d.to_string()).collect()
}

/// Builds the ordered month grid: full weeks, padded with blank slots before
/// the 1st and after the last day. Selection and task bucketing both compare
/// canonical keys, never timestamps.
pub fn build<'a>(
    reference_month: MonthRef,
    tasks: &'a [Task],
    selected: &DateKey,
) -> Vec<CalendarCell<'a>> {
    let days = date_math::days_in_month(reference_month.year(), reference_month.month());
    let lead = date_math::first_weekday_of_month(reference_month.year(), reference_month.month());
    let total_slots = (days + lead).div_ceil(7) * 7;

    let mut cells = Vec::with_capacity(total_slots as usize);
    for slot in 0..total_slots {
        let day_offset = slot as i64 - lead as i64 + 1;
        if day_offset < 1 || day_offset > days as i64 {
            cells.push(CalendarCell::padding());
            continue;
        }

        let day = day_offset as u32;
        match NaiveDate::from_ymd_opt(reference_month.year(), reference_month.month(), day) {
            Some(date) => {
                let key = date_math::canonical_key(date);
                cells.push(CalendarCell {
                    day_number: Some(day),
                    date: Some(key),
                    in_current_month: true,
                    selected: key == *selected,
                    tasks: tasks.iter().filter(|t| t.date == key).collect(),
                });
            }
            None => cells.push(CalendarCell::padding()),
        }
    }
    cells
}
