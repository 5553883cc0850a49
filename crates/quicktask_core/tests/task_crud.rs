use quicktask_core::{TaskFilter, TaskManager, TaskManagerError, TaskValidationError};

#[test]
fn add_task_returns_sequential_indices() {
    let mut manager = TaskManager::new();

    assert_eq!(manager.add_task("a").unwrap(), 0);
    assert_eq!(manager.add_task("b").unwrap(), 1);
    assert_eq!(manager.add_task("c").unwrap(), 2);
    assert_eq!(manager.len(), 3);
}

#[test]
fn add_then_list_all_contains_exactly_the_new_entry() {
    let mut manager = TaskManager::new();
    manager.add_task("first").unwrap();

    let listed: Vec<_> = manager.list_tasks(TaskFilter::All).collect();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "first");
    assert!(!listed[0].completed);
    assert_eq!(listed[0].completed_at, None);
}

#[test]
fn add_blank_title_is_rejected_and_nothing_is_appended() {
    let mut manager = TaskManager::new();

    for title in ["", "   "] {
        let err = manager.add_task(title).unwrap_err();
        assert_eq!(
            err,
            TaskManagerError::Validation(TaskValidationError::BlankTitle)
        );
    }

    assert!(manager.is_empty());
    assert_eq!(manager.list_tasks(TaskFilter::All).count(), 0);
}

#[test]
fn get_task_returns_snapshot_or_out_of_bounds() {
    let mut manager = TaskManager::new();
    manager.add_task("only").unwrap();

    assert_eq!(manager.get_task(0).unwrap().title, "only");

    let err = manager.get_task(1).unwrap_err();
    assert!(matches!(
        err,
        TaskManagerError::IndexOutOfBounds { index: 1, len: 1 }
    ));
}

#[test]
fn mark_complete_returns_updated_snapshot() {
    let mut manager = manager_with(&["a", "b"]);

    let snapshot = manager.mark_complete(1).unwrap();
    assert_eq!(snapshot.title, "b");
    assert!(snapshot.completed);
    assert!(snapshot.completed_at.is_some());

    assert!(!manager.get_task(0).unwrap().completed);
}

#[test]
fn mark_complete_then_incomplete_restores_pending_at_every_index() {
    let mut manager = manager_with(&["a", "b", "c"]);

    for index in 0..manager.len() {
        manager.mark_complete(index).unwrap();
        let snapshot = manager.mark_incomplete(index).unwrap();
        assert!(!snapshot.completed);
        assert_eq!(snapshot.completed_at, None);
    }
}

#[test]
fn repeated_marks_are_idempotent_and_never_error() {
    let mut manager = manager_with(&["a"]);

    let first = manager.mark_complete(0).unwrap();
    let second = manager.mark_complete(0).unwrap();
    assert_eq!(second, first);

    manager.mark_incomplete(0).unwrap();
    let again = manager.mark_incomplete(0).unwrap();
    assert!(!again.completed);
    assert_eq!(again.completed_at, None);
}

#[test]
fn mark_out_of_bounds_is_rejected() {
    let mut manager = manager_with(&["a"]);

    assert!(matches!(
        manager.mark_complete(5).unwrap_err(),
        TaskManagerError::IndexOutOfBounds { index: 5, len: 1 }
    ));
    assert!(matches!(
        manager.mark_incomplete(5).unwrap_err(),
        TaskManagerError::IndexOutOfBounds { index: 5, len: 1 }
    ));
}

#[test]
fn remove_task_shifts_later_indices_down() {
    let mut manager = manager_with(&["a", "b", "c"]);

    let removed = manager.remove_task(0).unwrap();
    assert_eq!(removed.title, "a");

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.get_task(0).unwrap().title, "b");
    assert_eq!(manager.get_task(1).unwrap().title, "c");
}

#[test]
fn remove_out_of_bounds_leaves_collection_unmodified() {
    let mut manager = manager_with(&["a", "b"]);
    let before: Vec<_> = manager.list_tasks(TaskFilter::All).collect();

    let err = manager.remove_task(2).unwrap_err();
    assert!(matches!(
        err,
        TaskManagerError::IndexOutOfBounds { index: 2, len: 2 }
    ));

    let after: Vec<_> = manager.list_tasks(TaskFilter::All).collect();
    assert_eq!(after, before);
}

#[test]
fn list_is_restartable_and_preserves_insertion_order() {
    let mut manager = manager_with(&["a", "b", "c"]);
    manager.mark_complete(1).unwrap();

    let first_pass: Vec<_> = manager
        .list_tasks(TaskFilter::All)
        .map(|snapshot| snapshot.title)
        .collect();
    let second_pass: Vec<_> = manager
        .list_tasks(TaskFilter::All)
        .map(|snapshot| snapshot.title)
        .collect();

    assert_eq!(first_pass, vec!["a", "b", "c"]);
    assert_eq!(second_pass, first_pass);
}

#[test]
fn pending_and_completed_partition_the_full_listing() {
    let mut manager = manager_with(&["a", "b", "c", "d"]);
    manager.mark_complete(1).unwrap();
    manager.mark_complete(3).unwrap();

    let all: Vec<_> = manager.list_tasks(TaskFilter::All).collect();
    let pending: Vec<_> = manager.list_tasks(TaskFilter::Pending).collect();
    let completed: Vec<_> = manager.list_tasks(TaskFilter::Completed).collect();

    assert_eq!(pending.len() + completed.len(), all.len());
    for snapshot in &all {
        let bucket = if snapshot.completed {
            &completed
        } else {
            &pending
        };
        assert!(bucket.contains(snapshot));
    }
    for snapshot in pending.iter().chain(&completed) {
        assert!(all.contains(snapshot));
    }
    assert!(pending.iter().all(|snapshot| !snapshot.completed));
    assert!(completed.iter().all(|snapshot| snapshot.completed));
}

#[test]
fn task_filter_serializes_snake_case_and_defaults_to_all() {
    assert_eq!(serde_json::to_value(TaskFilter::All).unwrap(), "all");
    assert_eq!(serde_json::to_value(TaskFilter::Pending).unwrap(), "pending");
    assert_eq!(
        serde_json::to_value(TaskFilter::Completed).unwrap(),
        "completed"
    );
    assert_eq!(TaskFilter::default(), TaskFilter::All);
}

fn manager_with(titles: &[&str]) -> TaskManager {
    let mut manager = TaskManager::new();
    for title in titles {
        manager.add_task(*title).unwrap();
    }
    manager
}
