//! Storage port contract tests for the `PostgreSQL` task repository.

use super::helpers::{
    CleanupGuard, ensure_template, new_task, setup_repository, task_id, test_runtime,
    unique_db_name,
};
use chrono::{DateTime, Duration, Utc};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use tasktrack::task::{
    domain::{PageRequest, Task, TaskDraft, TaskFilter, TaskPriority, TaskStatus, UserId},
    ports::{TaskRepository, TaskRepositoryError},
};

fn page(size: u32, number: u32) -> PageRequest {
    PageRequest::new(size, number).expect("positive page size")
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

fn micros(instant: Option<DateTime<Utc>>) -> Option<i64> {
    instant.map(|value| value.timestamp_micros())
}

#[rstest]
fn insert_assigns_sequential_ids_and_round_trips(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = unique_db_name("task_insert");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let first = rt
        .block_on(repo.insert(&new_task(2, Some(12), TaskPriority::High)))
        .expect("insert should succeed");
    let second = rt
        .block_on(repo.insert(&new_task(3, None, TaskPriority::Low)))
        .expect("insert should succeed");

    assert_eq!(first.id(), task_id(1));
    assert_eq!(second.id(), task_id(2));

    let fetched = rt
        .block_on(repo.find_by_id(first.id()))
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.creator_id(), UserId::new(2));
    assert_eq!(fetched.assigned_user_id(), Some(UserId::new(12)));
    assert_eq!(fetched.status(), TaskStatus::Created);
    assert_eq!(fetched.priority(), TaskPriority::High);
    assert_eq!(fetched.done_at(), None);
    assert_eq!(
        fetched.created_at().timestamp_micros(),
        first.created_at().timestamp_micros()
    );
}

#[rstest]
fn find_by_id_returns_none_for_missing(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = unique_db_name("task_find_none");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let found = rt
        .block_on(repo.find_by_id(task_id(404)))
        .expect("lookup should succeed");
    let exists = rt
        .block_on(repo.exists_by_id(task_id(404)))
        .expect("exists check should succeed");

    assert!(found.is_none());
    assert!(!exists);
}

#[rstest]
fn search_filters_then_pages_in_id_order(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = unique_db_name("task_search");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    for (creator, priority) in [
        (1, TaskPriority::High),
        (2, TaskPriority::High),
        (1, TaskPriority::Low),
        (1, TaskPriority::High),
        (2, TaskPriority::Low),
        (1, TaskPriority::High),
    ] {
        rt.block_on(repo.insert(&new_task(creator, Some(9), priority)))
            .expect("insert should succeed");
    }
    rt.block_on(repo.set_status(task_id(4), TaskStatus::InProgress))
        .expect("set status should succeed");
    let by_creator = TaskFilter {
        creator_id: Some(UserId::new(1)),
        ..TaskFilter::default()
    };

    let first = rt
        .block_on(repo.search_all_by_filter(&by_creator, page(3, 0)))
        .expect("search should succeed");
    let second = rt
        .block_on(repo.search_all_by_filter(&by_creator, page(3, 1)))
        .expect("search should succeed");
    let past_end = rt
        .block_on(repo.search_all_by_filter(&by_creator, page(3, 5)))
        .expect("search should succeed");
    let combined = rt
        .block_on(repo.search_all_by_filter(
            &TaskFilter {
                creator_id: Some(UserId::new(1)),
                assigned_user_id: Some(UserId::new(9)),
                status: Some(TaskStatus::Created),
                priority: Some(TaskPriority::High),
                ..TaskFilter::default()
            },
            page(10, 0),
        ))
        .expect("search should succeed");

    assert_eq!(ids(&first), vec![1, 3, 4]);
    assert_eq!(ids(&second), vec![6]);
    assert!(past_end.is_empty());
    assert_eq!(ids(&combined), vec![1, 6]);
}

#[rstest]
fn count_by_status_reflects_targeted_updates(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = unique_db_name("task_count");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    for _ in 0..3 {
        rt.block_on(repo.insert(&new_task(1, Some(5), TaskPriority::Medium)))
            .expect("insert should succeed");
    }
    rt.block_on(repo.set_status(task_id(2), TaskStatus::InProgress))
        .expect("set status should succeed");
    rt.block_on(repo.set_status_and_done_at(task_id(3), TaskStatus::Done, Utc::now()))
        .expect("targeted update should succeed");

    let counts = [TaskStatus::Created, TaskStatus::InProgress, TaskStatus::Done].map(|status| {
        rt.block_on(repo.count_by_status(status))
            .expect("count should succeed")
    });

    assert_eq!(counts, [1, 1, 1]);
}

#[rstest]
fn set_status_and_done_at_touch_only_named_columns(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = unique_db_name("task_done_at");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let stored = rt
        .block_on(repo.insert(&new_task(3, Some(7), TaskPriority::High)))
        .expect("insert should succeed");
    let done_at = Utc::now() + Duration::minutes(5);

    rt.block_on(repo.set_status_and_done_at(stored.id(), TaskStatus::Done, done_at))
        .expect("targeted update should succeed");
    rt.block_on(repo.set_status(stored.id(), TaskStatus::InProgress))
        .expect("set status should succeed");
    let fetched = rt
        .block_on(repo.find_by_id(stored.id()))
        .expect("lookup should succeed")
        .expect("task should exist");

    assert_eq!(fetched.status(), TaskStatus::InProgress);
    assert_eq!(micros(fetched.done_at()), micros(Some(done_at)));
    assert_eq!(fetched.creator_id(), stored.creator_id());
    assert_eq!(fetched.assigned_user_id(), stored.assigned_user_id());
    assert_eq!(fetched.priority(), stored.priority());
}

#[rstest]
fn replace_overwrites_every_editable_column(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = unique_db_name("task_replace");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let deadline = Utc::now().date_naive() + Duration::days(30);
    let stored = rt
        .block_on(repo.insert(&new_task(2, Some(12), TaskPriority::High)))
        .expect("insert should succeed");
    let with_deadline = stored
        .apply_update(
            &TaskDraft::new()
                .with_creator(UserId::new(2))
                .with_assignee(UserId::new(12))
                .with_deadline(deadline),
        )
        .expect("update should be accepted");
    rt.block_on(repo.replace(&with_deadline))
        .expect("replace should succeed");

    let cleared = with_deadline
        .apply_update(&TaskDraft::new().with_creator(UserId::new(4)))
        .expect("update should be accepted");
    rt.block_on(repo.replace(&cleared))
        .expect("replace should succeed");
    let fetched = rt
        .block_on(repo.find_by_id(stored.id()))
        .expect("lookup should succeed")
        .expect("task should exist");

    assert_eq!(with_deadline.deadline_date(), Some(deadline));
    assert_eq!(fetched.creator_id(), UserId::new(4));
    assert_eq!(fetched.assigned_user_id(), None);
    assert_eq!(fetched.deadline_date(), None);
    assert_eq!(fetched.priority(), TaskPriority::High);
    assert_eq!(fetched.status(), TaskStatus::Created);
}

#[rstest]
fn writes_to_missing_rows_report_not_found(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = unique_db_name("task_missing");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let stored = rt
        .block_on(repo.insert(&new_task(1, None, TaskPriority::Low)))
        .expect("insert should succeed");
    rt.block_on(repo.delete_by_id(stored.id()))
        .expect("delete should succeed");
    let missing = stored.id();

    let status = rt.block_on(repo.set_status(missing, TaskStatus::InProgress));
    let done = rt.block_on(repo.set_status_and_done_at(missing, TaskStatus::Done, Utc::now()));
    let replaced = rt.block_on(repo.replace(&stored));
    let deleted = rt.block_on(repo.delete_by_id(missing));

    assert!(matches!(status, Err(TaskRepositoryError::NotFound(id)) if id == missing));
    assert!(matches!(done, Err(TaskRepositoryError::NotFound(_))));
    assert!(matches!(replaced, Err(TaskRepositoryError::NotFound(_))));
    assert!(matches!(deleted, Err(TaskRepositoryError::NotFound(_))));

    let next = rt
        .block_on(repo.insert(&new_task(1, None, TaskPriority::Low)))
        .expect("insert should succeed");
    assert_eq!(next.id(), task_id(2));
}

#[rstest]
fn ensure_schema_is_idempotent(shared_test_cluster: &'static TestCluster) {
    ensure_template(shared_test_cluster).expect("template setup");
    let db_name = unique_db_name("task_schema");
    let _guard = CleanupGuard::new(shared_test_cluster, db_name.clone());
    let repo = setup_repository(shared_test_cluster, &db_name).expect("repository setup");
    let rt = test_runtime();

    let stored = rt
        .block_on(repo.insert(&new_task(1, None, TaskPriority::Medium)))
        .expect("insert should succeed");
    rt.block_on(repo.ensure_schema())
        .expect("schema setup should succeed on an existing table");

    let exists = rt
        .block_on(repo.exists_by_id(stored.id()))
        .expect("exists check should succeed");
    assert!(exists);
}
