//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task entity and its read-only snapshot projection.
//! - Keep completion-state transitions inside entity methods.
//!
//! # Invariants
//! - Every stored title is trimmed and non-blank.
//! - `completed_at` is present if and only if the task is completed.

pub mod task;
