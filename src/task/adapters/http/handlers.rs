//! Route table and request handlers for task endpoints.

use super::{ApiError, TaskQuery, TaskRequest, TaskResponse};
use crate::task::{
    domain::{TaskFilter, TaskId},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
};
use mockable::Clock;
use tracing::info;

type ServiceState<R, C> = State<TaskLifecycleService<R, C>>;
type ApiResult<T> = Result<T, ApiError>;

/// Builds the task router over `service`.
///
/// | Method | Path | Operation |
/// |--------|------|-----------|
/// | `GET` | `/tasks` | filtered, paged listing |
/// | `POST` | `/tasks` | create (`201 Created`) |
/// | `GET` | `/tasks/{id}` | fetch one |
/// | `PUT` | `/tasks/{id}` | update editable fields |
/// | `DELETE` | `/tasks/{id}` | delete |
/// | `PATCH` | `/tasks/{id}/start` | `CREATED` to `IN_PROGRESS` |
/// | `PATCH` | `/tasks/{id}/complete` | `IN_PROGRESS` to `DONE` |
/// | `PATCH` | `/tasks/{id}/resume` | `DONE` to `IN_PROGRESS` |
pub fn router<R, C>(service: TaskLifecycleService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/tasks", get(list_tasks::<R, C>).post(create_task::<R, C>))
        .route(
            "/tasks/{id}",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .route("/tasks/{id}/start", patch(start_task::<R, C>))
        .route("/tasks/{id}/complete", patch(complete_task::<R, C>))
        .route("/tasks/{id}/resume", patch(resume_task::<R, C>))
        .with_state(service)
}

async fn list_tasks<R, C>(
    State(service): ServiceState<R, C>,
    Query(query): Query<TaskQuery>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(?query, "listing tasks");
    let filter = TaskFilter::from(query);
    let tasks = service.search_all_by_filter(&filter).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

async fn get_task<R, C>(
    State(service): ServiceState<R, C>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(task_id = id, "fetching task");
    let task = service.get_by_id(TaskId::new(id)?).await?;
    Ok(Json(task.into()))
}

async fn create_task<R, C>(
    State(service): ServiceState<R, C>,
    Json(request): Json<TaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!("creating task");
    let task = service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

async fn update_task<R, C>(
    State(service): ServiceState<R, C>,
    Path(id): Path<i64>,
    Json(request): Json<TaskRequest>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(task_id = id, "updating task");
    let task = service.update(TaskId::new(id)?, request.into()).await?;
    Ok(Json(task.into()))
}

async fn delete_task<R, C>(
    State(service): ServiceState<R, C>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(task_id = id, "deleting task");
    service.delete(TaskId::new(id)?).await?;
    Ok(StatusCode::OK)
}

async fn start_task<R, C>(
    State(service): ServiceState<R, C>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(task_id = id, "starting task");
    let task = service.start(TaskId::new(id)?).await?;
    Ok(Json(task.into()))
}

async fn complete_task<R, C>(
    State(service): ServiceState<R, C>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(task_id = id, "completing task");
    let task = service.complete(TaskId::new(id)?).await?;
    Ok(Json(task.into()))
}

async fn resume_task<R, C>(
    State(service): ServiceState<R, C>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    info!(task_id = id, "resuming task");
    let task = service.resume(TaskId::new(id)?).await?;
    Ok(Json(task.into()))
}
