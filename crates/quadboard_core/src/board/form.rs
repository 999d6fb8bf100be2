//! Creation form field set and submission glue.
//!
//! # Responsibility
//! - Gather the new-task fields and hand them to a quadrant's `add`.
//! - Close the owning quadrant's modal once submission is initiated.
//!
//! # Invariants
//! - The form performs no field validation; empty content is passed through
//!   unchanged. That is inherited behavior, not an omission to fix here.

use crate::board::quadrant::QuadrantStore;
use crate::gateway::TodoGateway;

/// Field set collected by the creation modal.
///
/// The target quadrant's priority is not part of the form; the store stamps
/// its own tag on every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub content: String,
    pub duration_minutes: u32,
    pub schedule: String,
    pub is_schedule: bool,
}

impl TaskForm {
    /// Submits the form into `store` and closes the quadrant's modal.
    ///
    /// Expected to run only while the modal is open; the form does not
    /// re-check that precondition.
    pub fn submit<G: TodoGateway>(self, store: &mut QuadrantStore<G>) {
        store.add(&self);
        store.close_modal();
    }
}
