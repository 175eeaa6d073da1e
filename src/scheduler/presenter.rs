use crate::core::models::Task;
use crate::core::types::DateKey;

/// Derived day-detail modal state.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail<'a> {
    /// True iff `items` is non-empty; the modal is never toggled
    /// independently of the data.
    pub visible: bool,
    pub items: Vec<&'a Task>,
}

/// Full match set for the selected day's canonical key, in store order.
/// Same-day items are deliberately not re-sorted by time of day.
pub fn day_detail<'a>(tasks: &'a [Task], selected: &DateKey) -> DayDetail<'a> {
    let items: Vec<&Task> = tasks.iter().filter(|t| t.date == *selected).collect();
    DayDetail {
        visible: !items.is_empty(),
        items,
    }
}
