pub mod memory;

use crate::core::models::{OwnerId, Task, TaskDraft, TaskId, TaskPatch};
use crate::errors::Result;
use async_trait::async_trait;
use strum_macros::{AsRefStr, Display};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub use memory::MemoryTaskStore;

/// The full owner-scoped task set, replaced wholesale per change event.
pub type TaskSnapshot = Vec<Task>;

/// Store operation names, used in error reporting and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum StoreOp {
    Create,
    Update,
    Delete,
}

/// One delivery on a live subscription.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// The complete current task set for the subscribed owner. Applied
    /// atomically; never a partial patch.
    Snapshot(TaskSnapshot),
    /// The change stream failed. Consumers keep their last snapshot.
    Lapsed(String),
}

/// Receiving half of a live subscription. Events arrive in the order the
/// store emits them; dropping the feed is the unsubscribe.
pub struct TaskFeed {
    rx: UnboundedReceiver<StoreEvent>,
}

impl TaskFeed {
    pub fn channel() -> (UnboundedSender<StoreEvent>, TaskFeed) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, TaskFeed { rx })
    }

    /// Waits for the next event; `None` once the store side is gone.
    pub async fn next_event(&mut self) -> Option<StoreEvent> {
        self.rx.recv().await
    }

    /// Non-blocking poll for an already-queued event.
    pub fn try_next_event(&mut self) -> Option<StoreEvent> {
        self.rx.try_recv().ok()
    }
}

impl std::fmt::Debug for TaskFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskFeed").finish_non_exhaustive()
    }
}

/// Contract any backing task store must satisfy. The store is the sole
/// authority on persisted state: callers never assume an operation took
/// effect until a snapshot confirms it.
///
/// Subscribing delivers an initial snapshot immediately, then one snapshot
/// per change to the owner's task set.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create(&self, draft: TaskDraft) -> Result<TaskId>;

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<()>;

    async fn delete(&self, id: &TaskId) -> Result<()>;

    fn subscribe_by_owner(&self, owner: &OwnerId) -> TaskFeed;
}
