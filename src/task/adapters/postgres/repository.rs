//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        NewTask, PageRequest, PersistedTaskData, Task, TaskFilter, TaskId, TaskPriority,
        TaskStatus, UserId,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_tasks/up.sql");

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `tasks` table and its indexes when they are missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when a connection cannot
    /// be acquired or the DDL fails.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TASKS_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn search_all_by_filter(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let criteria = *filter;
        self.run_blocking(move |connection| {
            let mut query: tasks::BoxedQuery<'_, Pg> = tasks::table.into_boxed();
            if let Some(creator_id) = criteria.creator_id {
                query = query.filter(tasks::creator_id.eq(creator_id.value()));
            }
            if let Some(assigned_user_id) = criteria.assigned_user_id {
                query = query.filter(tasks::assigned_user_id.eq(assigned_user_id.value()));
            }
            if let Some(status) = criteria.status {
                query = query.filter(tasks::status.eq(status.as_str()));
            }
            if let Some(priority) = criteria.priority {
                query = query.filter(tasks::priority.eq(priority.as_str()));
            }

            let rows = query
                .order(tasks::id.asc())
                .offset(clamp_to_i64(page.offset()))
                .limit(clamp_to_i64(page.limit()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn replace(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let updated_count = diesel::update(tasks::table.find(task_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            ensure_row_touched(updated_count, task_id)
        })
        .await
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(tasks::table.find(id.value())))
                .get_result::<bool>(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            ensure_row_touched(deleted_count, id)
        })
        .await
    }

    async fn set_status(&self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated_count = diesel::update(tasks::table.find(id.value()))
                .set(tasks::status.eq(status.as_str()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            ensure_row_touched(updated_count, id)
        })
        .await
    }

    async fn set_status_and_done_at(
        &self,
        id: TaskId,
        status: TaskStatus,
        done_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated_count = diesel::update(tasks::table.find(id.value()))
                .set((
                    tasks::status.eq(status.as_str()),
                    tasks::done_date_time.eq(Some(done_at)),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            ensure_row_touched(updated_count, id)
        })
        .await
    }

    async fn count_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let count = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn ensure_row_touched(affected: usize, id: TaskId) -> TaskRepositoryResult<()> {
    if affected == 0 {
        return Err(TaskRepositoryError::NotFound(id));
    }
    Ok(())
}

fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        creator_id: task.creator_id().value(),
        assigned_user_id: task.assigned_user_id().map(UserId::value),
        status: task.status().as_str().to_owned(),
        create_date_time: task.created_at(),
        deadline_date: task.deadline_date(),
        priority: task.priority().as_str().to_owned(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        creator_id: task.creator_id().value(),
        assigned_user_id: task.assigned_user_id().map(UserId::value),
        status: task.status().as_str().to_owned(),
        create_date_time: task.created_at(),
        deadline_date: task.deadline_date(),
        done_date_time: task.done_at(),
        priority: task.priority().as_str().to_owned(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        creator_id,
        assigned_user_id,
        status: persisted_status,
        create_date_time,
        deadline_date,
        done_date_time,
        priority: persisted_priority,
    } = row;

    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        creator_id: UserId::new(creator_id),
        assigned_user_id: assigned_user_id.map(UserId::new),
        status,
        created_at: create_date_time,
        deadline_date,
        done_at: done_date_time,
        priority,
    };
    Ok(Task::from_persisted(data))
}
