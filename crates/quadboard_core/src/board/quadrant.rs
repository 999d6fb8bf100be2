//! Per-quadrant task list and its four transitions.
//!
//! # Responsibility
//! - Hold the ordered task list for one fixed priority quadrant.
//! - Mirror add/complete/delete to the persistence gateway, fire-and-forget.
//!
//! # Invariants
//! - Every stored task carries this quadrant's priority tag.
//! - Task ids are unique within the list at any instant.
//! - Reorder changes list position only; it never touches the gateway.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::board::form::TaskForm;
use crate::gateway::{GatewayResult, TodoGateway};
use crate::model::task::{Priority, Task, UserId};
use log::{debug, info, warn};
use std::sync::Arc;

/// Ordered task list for one quadrant, plus the quadrant's creation-modal
/// flag.
///
/// The store updates optimistically: the in-memory list always changes, and
/// a failed gateway write is logged and dropped. Local state and the journal
/// can therefore diverge silently; that is inherited, documented behavior.
pub struct QuadrantStore<G: TodoGateway> {
    priority: Priority,
    user: UserId,
    gateway: Arc<G>,
    tasks: Vec<Task>,
    modal_open: bool,
}

impl<G: TodoGateway> QuadrantStore<G> {
    /// Creates an empty store fixed to `priority`.
    ///
    /// Quadrants never load persisted state; every session starts empty.
    pub fn new(priority: Priority, user: UserId, gateway: Arc<G>) -> Self {
        Self {
            priority,
            user,
            gateway,
            tasks: Vec::new(),
            modal_open: false,
        }
    }

    /// This quadrant's fixed priority tag.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Current list, in render order (top to bottom).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a new task built from the form's field set.
    ///
    /// # Contract
    /// - The id is `(current length + 1)` as text, computed before insertion.
    ///   Ids can be reused after deletions shrink the list; kept for
    ///   compatibility with the recorded event stream.
    /// - `schedule` is forced empty when `is_schedule` is false, regardless of
    ///   caller input.
    /// - The stored priority is always this quadrant's tag.
    /// - The gateway is notified with the full record before the local append;
    ///   its result is logged and otherwise ignored.
    pub fn add(&mut self, form: &TaskForm) {
        let id = (self.tasks.len() + 1).to_string();
        let schedule = if form.is_schedule {
            form.schedule.clone()
        } else {
            String::new()
        };
        let task = Task {
            id,
            content: form.content.clone(),
            priority: self.priority,
            duration_minutes: form.duration_minutes,
            schedule,
            is_schedule: form.is_schedule,
        };

        self.notify("todo_add", self.gateway.add_todo(&self.user, &task));
        info!(
            "event=todo_add module=board status=ok priority={} id={} len={}",
            self.priority,
            task.id,
            self.tasks.len() + 1
        );
        self.tasks.push(task);
    }

    /// Records completion and drops every entry matching `task.id`.
    ///
    /// The gateway is notified even when no matching entry exists locally.
    pub fn complete(&mut self, task: &Task) {
        self.notify("todo_complete", self.gateway.mark_todo(&self.user, task));
        let removed = self.retain_without(&task.id);
        info!(
            "event=todo_complete module=board status=ok priority={} id={} removed={}",
            self.priority, task.id, removed
        );
    }

    /// Records deletion and drops every entry matching `task.id`.
    ///
    /// Symmetric to [`complete`](Self::complete).
    pub fn remove(&mut self, task: &Task) {
        self.notify("todo_delete", self.gateway.delete_todo(&self.user, task));
        let removed = self.retain_without(&task.id);
        info!(
            "event=todo_delete module=board status=ok priority={} id={} removed={}",
            self.priority, task.id, removed
        );
    }

    /// Moves the task at `from` to position `to`, keeping all other relative
    /// order.
    ///
    /// No-op when `from == to` or either index is out of range (the drag
    /// handler fires with stale indices when a drop lands outside the list).
    /// Reorders are deliberately not journaled; see DESIGN.md.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        if from >= self.tasks.len() || to >= self.tasks.len() {
            debug!(
                "event=todo_reorder module=board status=skipped priority={} from={} to={} len={}",
                self.priority,
                from,
                to,
                self.tasks.len()
            );
            return;
        }

        let moved = self.tasks.remove(from);
        self.tasks.insert(to, moved);
        info!(
            "event=todo_reorder module=board status=ok priority={} from={} to={}",
            self.priority, from, to
        );
    }

    /// Opens this quadrant's creation modal.
    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Closes this quadrant's creation modal.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    fn retain_without(&mut self, id: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        before - self.tasks.len()
    }

    fn notify(&self, event: &str, result: GatewayResult<()>) {
        // Fire-and-forget: local state updates no matter what the journal did.
        if let Err(err) = result {
            warn!(
                "event={} module=board status=gateway_error priority={} error={}",
                event, self.priority, err
            );
        }
    }
}
