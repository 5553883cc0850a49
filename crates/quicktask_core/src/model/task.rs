//! Task entity and snapshot projection.
//!
//! # Responsibility
//! - Define the single-task record with completion state and timestamps.
//! - Keep completion transitions idempotent and timestamps internal.
//!
//! # Invariants
//! - `title` is trimmed and never blank after construction.
//! - `completed_at` is `Some` if and only if `completed` is true.
//! - `created_at` is set once at construction and never changes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Validation error raised while constructing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only after trimming.
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single task record.
///
/// Fields are private: completion state and timestamps can only change
/// through [`Task::mark_complete`] and [`Task::mark_incomplete`], which keeps
/// the `completed`/`completed_at` pairing impossible to break from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    completed: bool,
    created_at: i64,
    completed_at: Option<i64>,
}

impl Task {
    /// Creates a new pending task from a caller-supplied title.
    ///
    /// # Contract
    /// - The title is trimmed before storage.
    /// - `created_at` is set to the current wall-clock time.
    ///
    /// # Errors
    /// - [`TaskValidationError::BlankTitle`] when the title is empty or
    ///   whitespace-only.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskValidationError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }

        Ok(Self {
            title: trimmed.to_string(),
            completed: false,
            created_at: now_epoch_ms(),
            completed_at: None,
        })
    }

    /// Trimmed task title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether this task has been completed.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Creation time in Unix epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Completion time in Unix epoch milliseconds; `None` while pending.
    pub fn completed_at(&self) -> Option<i64> {
        self.completed_at
    }

    /// Marks this task as completed and records the completion time.
    ///
    /// Idempotent: a second call leaves the state, including the original
    /// completion timestamp, unchanged.
    pub fn mark_complete(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.completed_at = Some(now_epoch_ms());
    }

    /// Reverts this task to pending and clears the completion time.
    ///
    /// Idempotent: repeated calls keep the task pending.
    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    /// Returns a read-only copy of all fields for display.
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            title: self.title.clone(),
            completed: self.completed,
            created_at: self.created_at,
            completed_at: self.completed_at,
        }
    }
}

/// Read-only copy of one task, safe to hand to display layers.
///
/// This is the only task shape that crosses the crate boundary in serialized
/// form; the entity itself stays non-serializable so external data cannot
/// fabricate a completed task without a completion timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Trimmed task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
    /// Completion time in Unix epoch milliseconds; `None` while pending.
    pub completed_at: Option<i64>,
}

impl Display for TaskSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let glyph = if self.completed { "✓" } else { "✗" };
        write!(f, "[{glyph}] {}", self.title)
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
