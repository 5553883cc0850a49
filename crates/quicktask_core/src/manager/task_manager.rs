//! In-memory task collection manager.
//!
//! # Responsibility
//! - Provide the add/list/mark/remove/clear/statistics entry points over one
//!   ordered task sequence.
//! - Enforce index-bounds validation before touching any element.
//!
//! # Invariants
//! - Indices handed to callers are positions in insertion order; removing an
//!   element shifts every later index down by one, so callers must not cache
//!   indices across mutating calls.
//! - Derived values (statistics) are recomputed from live state on every
//!   call, never cached.
//! - Log events carry metadata only; task titles never reach log output.

use crate::model::task::{Task, TaskSnapshot, TaskValidationError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ManagerResult<T> = Result<T, TaskManagerError>;

/// Error raised by collection manager operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskManagerError {
    /// Task construction rejected the input; surfaced unchanged.
    Validation(TaskValidationError),
    /// Caller-supplied index is not within the current bounds.
    IndexOutOfBounds { index: usize, len: usize },
}

impl Display for TaskManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "task index {index} is out of bounds (len {len})")
            }
        }
    }
}

impl Error for TaskManagerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::IndexOutOfBounds { .. } => None,
        }
    }
}

impl From<TaskValidationError> for TaskManagerError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Completion-state filter for listing tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Every task, regardless of state.
    #[default]
    All,
    /// Only tasks not yet completed.
    Pending,
    /// Only completed tasks.
    Completed,
}

impl TaskFilter {
    /// Returns whether the given task passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }
}

/// Aggregate counters over the current collection state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskStatistics {
    /// Number of tasks in the collection.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of pending tasks (`total - completed`).
    pub pending: usize,
    /// `completed / total * 100`; `0.0` for an empty collection.
    pub completion_rate: f64,
}

impl Display for TaskStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} total, {} completed, {} pending ({:.1}%)",
            self.total, self.completed, self.pending, self.completion_rate
        )
    }
}

/// Owner of the ordered in-memory task collection.
///
/// One instance per caller; every mutating operation takes `&mut self`, so a
/// shared-access setup would have to put the whole manager behind a single
/// mutual-exclusion boundary.
#[derive(Debug, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
}

impl TaskManager {
    /// Creates an empty task manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a task from the title and appends it to the collection.
    ///
    /// # Contract
    /// - Returns the assigned index of the new task (current tail position).
    /// - On validation failure nothing is appended.
    ///
    /// # Errors
    /// - [`TaskManagerError::Validation`] when the title is blank, surfaced
    ///   unchanged from task construction.
    pub fn add_task(&mut self, title: impl Into<String>) -> ManagerResult<usize> {
        let task = match Task::new(title) {
            Ok(task) => task,
            Err(err) => {
                debug!("event=task_add module=manager status=error error_code=blank_title");
                return Err(err.into());
            }
        };

        self.tasks.push(task);
        let index = self.tasks.len() - 1;
        debug!(
            "event=task_add module=manager status=ok index={index} total={}",
            self.tasks.len()
        );
        Ok(index)
    }

    /// Lists task snapshots matching the filter, in insertion order.
    ///
    /// The returned sequence is lazy (snapshots are produced on demand) and
    /// restartable (every call yields a fresh iterator from the head).
    pub fn list_tasks(&self, filter: TaskFilter) -> impl Iterator<Item = TaskSnapshot> + '_ {
        self.tasks
            .iter()
            .filter(move |task| filter.matches(task))
            .map(Task::snapshot)
    }

    /// Gets a snapshot of the task at `index`.
    ///
    /// # Errors
    /// - [`TaskManagerError::IndexOutOfBounds`] when `index >= len`.
    pub fn get_task(&self, index: usize) -> ManagerResult<TaskSnapshot> {
        self.ensure_index("task_get", index)?;
        Ok(self.tasks[index].snapshot())
    }

    /// Marks the task at `index` as completed and returns the updated
    /// snapshot.
    ///
    /// Repeating the call on an already-completed task is a no-op that keeps
    /// the original completion timestamp; it never errors.
    ///
    /// # Errors
    /// - [`TaskManagerError::IndexOutOfBounds`] when `index >= len`.
    pub fn mark_complete(&mut self, index: usize) -> ManagerResult<TaskSnapshot> {
        self.ensure_index("task_mark_complete", index)?;
        let task = &mut self.tasks[index];
        task.mark_complete();
        debug!("event=task_mark_complete module=manager status=ok index={index}");
        Ok(task.snapshot())
    }

    /// Reverts the task at `index` to pending and returns the updated
    /// snapshot. Idempotent; never errors on repeats.
    ///
    /// # Errors
    /// - [`TaskManagerError::IndexOutOfBounds`] when `index >= len`.
    pub fn mark_incomplete(&mut self, index: usize) -> ManagerResult<TaskSnapshot> {
        self.ensure_index("task_mark_incomplete", index)?;
        let task = &mut self.tasks[index];
        task.mark_incomplete();
        debug!("event=task_mark_incomplete module=manager status=ok index={index}");
        Ok(task.snapshot())
    }

    /// Removes the task at `index` and returns its final snapshot.
    ///
    /// # Contract
    /// - Every index after `index` shifts down by one.
    /// - On error the collection is left unmodified.
    ///
    /// # Errors
    /// - [`TaskManagerError::IndexOutOfBounds`] when `index >= len`.
    pub fn remove_task(&mut self, index: usize) -> ManagerResult<TaskSnapshot> {
        self.ensure_index("task_remove", index)?;
        let removed = self.tasks.remove(index);
        debug!(
            "event=task_remove module=manager status=ok index={index} total={}",
            self.tasks.len()
        );
        Ok(removed.snapshot())
    }

    /// Removes every completed task, preserving the relative order of the
    /// rest, and returns the number removed (0 when none matched).
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        let removed = before - self.tasks.len();
        debug!(
            "event=task_clear module=manager status=ok removed={removed} total={}",
            self.tasks.len()
        );
        removed
    }

    /// Computes aggregate counters from the current collection state.
    ///
    /// # Contract
    /// - Recomputed on every call; nothing is cached.
    /// - `completion_rate` is `0.0` for an empty collection (never divides
    ///   by zero).
    pub fn statistics(&self) -> TaskStatistics {
        let total = self.tasks.len();
        let completed = self
            .tasks
            .iter()
            .filter(|task| task.is_completed())
            .count();
        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        TaskStatistics {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        }
    }

    /// Number of tasks currently in the collection.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn ensure_index(&self, op: &'static str, index: usize) -> ManagerResult<()> {
        let len = self.tasks.len();
        if index < len {
            return Ok(());
        }
        debug!(
            "event={op} module=manager status=error error_code=index_out_of_bounds \
             index={index} len={len}"
        );
        Err(TaskManagerError::IndexOutOfBounds { index, len })
    }
}
