use crate::core::types::{ClockTime, DateKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque stable task identifier, assigned by the store on creation and
/// never reassigned. Unique within an owner's task set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(raw: impl Into<String>) -> Self {
        TaskId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated principal whose tasks are being viewed/edited. Every
/// store read and write is scoped by this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(raw: impl Into<String>) -> Self {
        OwnerId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled task. Belongs to exactly one owner and exactly one calendar
/// day; `time` is display/sort metadata, not part of the day bucketing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub date: DateKey,
    pub time: ClockTime,
    pub description: String,
    pub owner: OwnerId,
}

impl Task {
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        Task {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            description: draft.description,
            owner: draft.owner,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(id={}, title='{}', date={}, time={}, owner={})",
            self.id, self.title, self.date, self.time, self.owner
        )
    }
}

/// Fields for `TaskStore::create`. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub date: DateKey,
    pub time: ClockTime,
    pub description: String,
    pub owner: OwnerId,
}

/// Fields for `TaskStore::update`. The edit flow patches title, time and
/// description only; date and owner are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: String,
    pub time: ClockTime,
    pub description: String,
}
