//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicktask_core` linkage.
//! - Keep output deterministic for quick local sanity checks.
//!
//! This is not an interactive front end; it never reads input.

use quicktask_core::{default_log_level, init_logging, TaskFilter, TaskManager, TaskManagerError};

fn main() {
    println!("quicktask_core ping={}", quicktask_core::ping());
    println!("quicktask_core version={}", quicktask_core::core_version());

    let log_dir = std::env::temp_dir().join("quicktask-logs");
    match init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("logging=ok"),
        Err(err) => println!("logging=skipped ({err})"),
    }

    if let Err(err) = run_smoke() {
        eprintln!("smoke failed: {err}");
        std::process::exit(1);
    }
}

fn run_smoke() -> Result<(), TaskManagerError> {
    let mut manager = TaskManager::new();
    manager.add_task("write smoke test")?;
    let index = manager.add_task("run smoke test")?;
    manager.mark_complete(index)?;

    for snapshot in manager.list_tasks(TaskFilter::All) {
        println!("{snapshot}");
    }
    println!("stats {}", manager.statistics());
    Ok(())
}
