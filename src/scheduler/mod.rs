use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::models::{OwnerId, Task, TaskDraft, TaskId, TaskPatch};
use crate::core::types::{ClockTime, DateKey, MonthNav, MonthRef};
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::store::{StoreEvent, TaskFeed, TaskStore};

pub mod date_math;
pub mod grid;
pub mod presenter;
#[cfg(test)]
mod tests;

pub use grid::CalendarCell;
pub use presenter::DayDetail;

/// Draft form fields for the create/edit flow. `time` stays a raw string
/// until submit so partial input never errors mid-typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftFields {
    pub title: String,
    pub time: String,
    pub description: String,
}

impl DraftFields {
    fn clear(&mut self) {
        *self = DraftFields::default();
    }
}

/// Snapshot of everything the presentation layer reads. Owned by one
/// controller instance; readers borrow, never mutate.
#[derive(Debug, Clone)]
pub struct SchedulerState {
    pub reference_month: MonthRef,
    pub selected_date: DateKey,
    /// Owner-scoped task set, replaced wholesale per store change event.
    pub tasks: Vec<Task>,
    pub editing: Option<TaskId>,
    pub draft: DraftFields,
    /// Derived: true iff some task's date equals the selected key.
    pub modal_visible: bool,
    /// Set when the subscription lapses; the last snapshot is retained.
    pub degraded: bool,
}

impl SchedulerState {
    fn new(selected: DateKey) -> Self {
        SchedulerState {
            reference_month: MonthRef::from_date(selected.date()),
            selected_date: selected,
            tasks: Vec::new(),
            editing: None,
            draft: DraftFields::default(),
            modal_visible: false,
            degraded: false,
        }
    }
}

/// Pure derivation of the day-detail modal's visibility. Invoked after every
/// state-changing operation rather than wired as an observer graph, so there
/// is no ordering ambiguity between selection and snapshot updates.
pub fn modal_visible(tasks: &[Task], selected: &DateKey) -> bool {
    tasks.iter().any(|t| t.date == *selected)
}

/// Owns the scheduler state machine: the reference month, the selected date,
/// the live owner-scoped task set, and the create/edit draft. All mutation
/// funnels through named operations; store calls are the only suspension
/// points.
pub struct SchedulerController {
    store: Arc<dyn TaskStore>,
    owner: OwnerId,
    logger: Logger,
    state: SchedulerState,
    feed: Option<TaskFeed>,
    disposed: bool,
    in_flight: AtomicBool,
}

/// Holds the single-flight submit slot. Dropping the guard releases the
/// slot, so a submit future cancelled at its store await (a timed-out call,
/// a dropped task) leaves the controller ready for the next submit.
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            return Err(Error::SubmitInFlight);
        }
        Ok(SubmitGuard(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SchedulerController {
    /// Selection defaults to today (local calendar).
    pub fn new(store: Arc<dyn TaskStore>, owner: OwnerId, logger: Logger) -> Self {
        Self::with_selected_date(store, owner, logger, DateKey::today())
    }

    pub fn with_selected_date(
        store: Arc<dyn TaskStore>,
        owner: OwnerId,
        logger: Logger,
        selected: DateKey,
    ) -> Self {
        SchedulerController {
            store,
            owner,
            logger,
            state: SchedulerState::new(selected),
            feed: None,
            disposed: false,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The month grid for the current reference month.
    pub fn grid(&self) -> Vec<CalendarCell<'_>> {
        grid::build(
            self.state.reference_month,
            &self.state.tasks,
            &self.state.selected_date,
        )
    }

    /// The day-detail view for the selected date.
    pub fn day_detail(&self) -> DayDetail<'_> {
        presenter::day_detail(&self.state.tasks, &self.state.selected_date)
    }

    // ---- Subscription lifecycle --------------------------------------------

    /// Subscribes to the owner's task changes. Any previous feed is dropped
    /// first so a remount never receives duplicate or stale deliveries. The
    /// initial snapshot arrives through the new feed.
    pub fn attach(&mut self) {
        self.feed = None;
        if self.disposed {
            return;
        }
        self.feed = Some(self.store.subscribe_by_owner(&self.owner));
        self.logger.info(
            format!("Subscribed to task changes for owner {}", self.owner),
            LogTarget::FileOnly,
        );
    }

    /// Applies every already-queued change event, in delivery order.
    pub fn drain_changes(&mut self) {
        loop {
            let event = match self.feed.as_mut() {
                Some(feed) => feed.try_next_event(),
                None => None,
            };
            match event {
                Some(event) => self.apply_event(event),
                None => break,
            }
        }
    }

    /// Waits for one change event and applies it. Returns false once the
    /// feed is closed or the controller is detached.
    pub async fn next_change(&mut self) -> bool {
        let event = match self.feed.as_mut() {
            Some(feed) => feed.next_event().await,
            None => None,
        };
        match event {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    /// Delivery entry point. A disposed controller ignores queued events,
    /// guarding the dispose-then-deliver race.
    pub fn apply_event(&mut self, event: StoreEvent) {
        if self.disposed {
            return;
        }
        match event {
            StoreEvent::Snapshot(tasks) => {
                self.state.tasks = tasks;
                self.state.degraded = false;
                self.refresh_modal();
            }
            StoreEvent::Lapsed(reason) => {
                // Keep the last snapshot instead of flashing an empty grid.
                self.state.degraded = true;
                self.logger.warn(
                    format!("Task subscription lapsed: {reason}"),
                    LogTarget::FileOnly,
                );
            }
        }
    }

    /// Cancels the subscription synchronously and freezes the state. No
    /// event is applied after this.
    pub fn dispose(&mut self) {
        self.feed = None;
        self.disposed = true;
        self.logger
            .info("Scheduler controller disposed", LogTarget::FileOnly);
    }

    // ---- Selection and navigation ------------------------------------------

    pub fn select_date(&mut self, date: DateKey) {
        self.state.selected_date = date;
        self.refresh_modal();
    }

    /// Moves the reference month one step; the selected date is untouched.
    pub fn navigate_month(&mut self, direction: MonthNav) {
        self.state.reference_month = match direction {
            MonthNav::Prev => self.state.reference_month.prev(),
            MonthNav::Next => self.state.reference_month.next(),
        };
    }

    // ---- Draft editing ------------------------------------------------------

    /// Copies the task's fields into the draft and marks it as the edit
    /// target. The task must be in the current snapshot.
    pub fn begin_edit(&mut self, id: &TaskId) -> Result<()> {
        let task = self
            .state
            .tasks
            .iter()
            .find(|t| t.id == *id)
            .ok_or_else(|| Error::UnknownTask(id.clone()))?;
        self.state.draft = DraftFields {
            title: task.title.clone(),
            time: task.time.to_string(),
            description: task.description.clone(),
        };
        self.state.editing = Some(id.clone());
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.state.editing = None;
        self.state.draft.clear();
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.state.draft.title = title.into();
    }

    pub fn set_draft_time(&mut self, time: impl Into<String>) {
        self.state.draft.time = time.into();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.state.draft.description = description.into();
    }

    fn validated_time(&self) -> Result<ClockTime> {
        if self.state.draft.title.trim().is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }
        let raw = self.state.draft.time.trim();
        if raw.is_empty() {
            return Err(Error::validation("time", "must not be empty"));
        }
        ClockTime::try_from_str(raw).map_err(|_| Error::validation("time", "expected HH:MM"))
    }

    /// Persists the draft: exactly one `update` when an edit target is set,
    /// otherwise exactly one `create` dated to the selected day. Validation
    /// failures never reach the store; a failed store call keeps the draft
    /// for retry. The task list itself only changes via a confirmed
    /// snapshot. Cancelling the returned future (dropping it mid-await)
    /// releases the single-flight slot.
    pub async fn submit_draft(&mut self) -> Result<()> {
        let _guard = SubmitGuard::acquire(&self.in_flight)?;
        let time = self.validated_time()?;
        let title = self.state.draft.title.trim().to_string();
        let description = self.state.draft.description.clone();

        let result = match self.state.editing.clone() {
            Some(id) => {
                self.store
                    .update(
                        &id,
                        TaskPatch {
                            title,
                            time,
                            description,
                        },
                    )
                    .await
            }
            None => self
                .store
                .create(TaskDraft {
                    title,
                    date: self.state.selected_date,
                    time,
                    description,
                    owner: self.owner.clone(),
                })
                .await
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.state.editing = None;
                self.state.draft.clear();
                Ok(())
            }
            Err(err) => {
                self.logger
                    .error(format!("Task submit failed: {err}"), LogTarget::FileOnly);
                Err(err)
            }
        }
    }

    /// Deletes through the store only; no optimistic local pruning. The
    /// visible list updates when the subscription confirms the change.
    pub async fn delete_task(&mut self, id: &TaskId) -> Result<()> {
        let result = self.store.delete(id).await;
        if let Err(err) = &result {
            self.logger
                .error(format!("Task delete failed: {err}"), LogTarget::FileOnly);
        }
        result
    }

    fn refresh_modal(&mut self) {
        self.state.modal_visible = modal_visible(&self.state.tasks, &self.state.selected_date);
    }
}
