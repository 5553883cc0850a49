//! Collection management for the in-memory task list.
//!
//! # Responsibility
//! - Own the ordered task collection and all of its mutation entry points.
//! - Validate caller-supplied indices before every read or write.
//!
//! # Invariants
//! - Insertion order is display order; indices are positional and shift down
//!   on removal.
//! - Out-of-range indices surface as errors, never as panics.

pub mod task_manager;
