//! Core domain logic for QuickTask.
//! This crate is the single source of truth for task-list invariants.

pub mod logging;
pub mod manager;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status};
pub use manager::task_manager::{
    ManagerResult, TaskFilter, TaskManager, TaskManagerError, TaskStatistics,
};
pub use model::task::{Task, TaskSnapshot, TaskValidationError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
