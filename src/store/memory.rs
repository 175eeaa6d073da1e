use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::models::{OwnerId, Task, TaskDraft, TaskId, TaskPatch};
use crate::errors::{Error, Result};
use crate::store::{StoreEvent, StoreOp, TaskFeed, TaskSnapshot, TaskStore};
use tokio::sync::mpsc::UnboundedSender;

struct Watcher {
    owner: OwnerId,
    tx: UnboundedSender<StoreEvent>,
}

#[derive(Default)]
struct Inner {
    tasks: Vec<Task>,
    watchers: Vec<Watcher>,
}

/// In-memory reference implementation of the [`TaskStore`] contract, used by
/// the test suite and as the template for real backends. Snapshots preserve
/// insertion order; subscribers get an initial snapshot immediately and a
/// fresh one after every confirmed mutation.
#[derive(Default)]
pub struct MemoryTaskStore {
    inner: Mutex<Inner>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store without notifying anyone; call before subscribing.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        MemoryTaskStore {
            inner: Mutex::new(Inner {
                tasks,
                watchers: Vec::new(),
            }),
        }
    }

    /// Subscriptions whose feed is still open. Closed feeds are pruned on
    /// the next broadcast.
    pub fn live_watchers(&self) -> usize {
        match self.inner.lock() {
            Ok(inner) => inner.watchers.iter().filter(|w| !w.tx.is_closed()).count(),
            Err(_) => 0,
        }
    }

    fn lock(&self, op: StoreOp) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::store(op, "store state poisoned"))
    }

    fn snapshot_for(tasks: &[Task], owner: &OwnerId) -> TaskSnapshot {
        tasks.iter().filter(|t| t.owner == *owner).cloned().collect()
    }

    fn broadcast(inner: &mut Inner, owner: &OwnerId) {
        inner.watchers.retain(|w| !w.tx.is_closed());
        let snapshot = Self::snapshot_for(&inner.tasks, owner);
        for watcher in inner.watchers.iter().filter(|w| w.owner == *owner) {
            let _ = watcher.tx.send(StoreEvent::Snapshot(snapshot.clone()));
        }
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn create(&self, draft: TaskDraft) -> Result<TaskId> {
        let mut inner = self.lock(StoreOp::Create)?;
        let id = TaskId::new(Uuid::new_v4().to_string());
        let owner = draft.owner.clone();
        inner.tasks.push(Task::from_draft(id.clone(), draft));
        Self::broadcast(&mut inner, &owner);
        Ok(id)
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<()> {
        let mut inner = self.lock(StoreOp::Update)?;
        let owner = {
            let task = inner
                .tasks
                .iter_mut()
                .find(|t| t.id == *id)
                .ok_or_else(|| Error::store(StoreOp::Update, format!("no task with id {id}")))?;
            task.title = patch.title;
            task.time = patch.time;
            task.description = patch.description;
            task.owner.clone()
        };
        Self::broadcast(&mut inner, &owner);
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<()> {
        let mut inner = self.lock(StoreOp::Delete)?;
        let position = inner
            .tasks
            .iter()
            .position(|t| t.id == *id)
            .ok_or_else(|| Error::store(StoreOp::Delete, format!("no task with id {id}")))?;
        let removed = inner.tasks.remove(position);
        Self::broadcast(&mut inner, &removed.owner);
        Ok(())
    }

    fn subscribe_by_owner(&self, owner: &OwnerId) -> TaskFeed {
        let (tx, feed) = TaskFeed::channel();
        match self.inner.lock() {
            Ok(mut inner) => {
                // Initial snapshot is delivered before any change event.
                let snapshot = Self::snapshot_for(&inner.tasks, owner);
                let _ = tx.send(StoreEvent::Snapshot(snapshot));
                inner.watchers.push(Watcher {
                    owner: owner.clone(),
                    tx,
                });
            }
            Err(_) => {
                let _ = tx.send(StoreEvent::Lapsed("store state poisoned".into()));
            }
        }
        feed
    }
}
