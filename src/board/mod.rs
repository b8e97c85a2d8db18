//! Kanban board controller.
//!
//! Translates drag-and-drop gestures into task status transitions on a
//! [`Store`]. The controller holds only the active-drag pointer and borrows
//! the store per call, so the transition logic is testable without any
//! pointer or input framework: a rendering layer feeds it
//! `begin_drag` / `complete_drag` / `cancel_drag` and reads back the outcome.
//!
//! Transitions are unconditional moves among the three columns. Any column
//! may be reached from any other (a card may jump straight from todo to
//! done); the only rejection is a drop target that is not a known column,
//! which cancels the drag and leaves the card where it was.

use crate::models::{Task, TaskStatus};
use crate::store::Store;

/// One of the three fixed board lanes, with its display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Drop-target id, identical to the wire form of the status
    pub id: &'static str,
    /// Heading shown above the lane
    pub title: &'static str,
    /// The status a card gains when dropped here
    pub status: TaskStatus,
}

/// The board's columns in display order, left to right.
pub fn columns() -> [Column; 3] {
    [
        Column {
            id: "todo",
            title: "To Do",
            status: TaskStatus::Todo,
        },
        Column {
            id: "inprogress",
            title: "In Progress",
            status: TaskStatus::InProgress,
        },
        Column {
            id: "done",
            title: "Done",
            status: TaskStatus::Done,
        },
    ]
}

/// Result of completing a drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// The task was moved; carries the post-move record.
    Moved(Task),
    /// The drop was rejected (unknown column or vanished task) and the drag
    /// cancelled; no task was mutated.
    Cancelled,
}

impl DropOutcome {
    /// Returns true if the gesture moved a task.
    pub fn is_moved(&self) -> bool {
        matches!(self, DropOutcome::Moved(_))
    }
}

/// Drag-and-drop state machine for one board instance.
///
/// At most one drag is active at a time; beginning a new drag while one is
/// in flight implicitly cancels the first.
#[derive(Debug, Default)]
pub struct BoardController {
    active: Option<String>,
}

impl BoardController {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// The id of the task currently being dragged, if any. Rendering layers
    /// use this for the drag overlay.
    pub fn active_task(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Record that the given task was picked up.
    ///
    /// Silently does nothing when the id names no task, mirroring a pointer
    /// grabbing empty board space. An already-active drag is overwritten.
    pub fn begin_drag(&mut self, store: &Store, task_id: &str) {
        if store.get_task(task_id).is_err() {
            tracing::trace!(task = %task_id, "drag ignored, no such task");
            return;
        }
        if let Some(previous) = self.active.replace(task_id.to_string()) {
            tracing::trace!(task = %previous, "drag superseded");
        }
    }

    /// Complete a drag by dropping the task on a column.
    ///
    /// The target is taken from the drop event, not from the recorded drag
    /// state, so a drop is honored even if `begin_drag` was never observed.
    /// An unrecognized column id cancels the gesture and the task keeps its
    /// prior status. Either way the active-drag pointer is cleared.
    pub fn complete_drag(
        &mut self,
        store: &mut Store,
        task_id: &str,
        column_id: &str,
    ) -> DropOutcome {
        self.active = None;

        let Some(status) = TaskStatus::from_column_id(column_id) else {
            tracing::debug!(task = %task_id, column = %column_id, "drop on unknown column, drag cancelled");
            return DropOutcome::Cancelled;
        };

        match store.set_task_status(task_id, status) {
            Ok(task) => {
                tracing::debug!(task = %task.id, column = %column_id, "task moved");
                DropOutcome::Moved(task)
            }
            Err(_) => {
                tracing::debug!(task = %task_id, "dropped task no longer exists, drag cancelled");
                DropOutcome::Cancelled
            }
        }
    }

    /// Abandon the in-flight drag without touching any task.
    pub fn cancel_drag(&mut self) {
        self.active = None;
    }
}
