mod date_math_tests;

use crate::core::models::{OwnerId, Task, TaskId};
use crate::core::types::{ClockTime, DateKey};
use crate::logging::Logger;
use crate::scheduler::SchedulerController;
use crate::store::MemoryTaskStore;
use std::sync::Arc;

pub(super) fn owner() -> OwnerId {
    OwnerId::new("owner-1")
}

pub(super) fn key(s: &str) -> DateKey {
    DateKey::try_from_str(s).unwrap()
}

pub(super) fn time(s: &str) -> ClockTime {
    ClockTime::try_from_str(s).unwrap()
}

pub(super) fn task(id: &str, title: &str, date: &str, at: &str) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.into(),
        date: key(date),
        time: time(at),
        description: String::new(),
        owner: owner(),
    }
}

pub(super) fn quiet_logger() -> Logger {
    let logger = Logger::new();
    logger.set_file_logging_enabled(false);
    logger
}

/// Controller anchored on 2024-03-05 against the given store.
pub(super) fn make_controller(store: Arc<MemoryTaskStore>) -> SchedulerController {
    SchedulerController::with_selected_date(store, owner(), quiet_logger(), key("2024-03-05"))
}
