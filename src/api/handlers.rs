//! Axum handlers for the task routes.

use super::{
    dto::{MessageResponse, StatusChangeRequest},
    error::{ApiError, Operation},
    extract::JsonBody,
    state::AppState,
};
use crate::task::{
    domain::{Task, TaskContent, TaskId, TaskInput, coerce_to_text},
    ports::TaskRepository,
    services::TransitionTaskRequest,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;

/// Message returned after `PUT /tasks/{id}`.
pub const TASK_UPDATED: &str = "Task updated successfully";
/// Message returned after `PUT /tasks/{id}/status`.
pub const TASK_STATUS_UPDATED: &str = "Task status updated successfully";
/// Message returned after `DELETE /tasks/{id}`.
pub const TASK_DELETED: &str = "Task deleted successfully";
/// Message returned after `PUT /tasks/{id}/restore`.
pub const TASK_RESTORED: &str = "Task restored successfully";
/// Message returned after `DELETE /tasks/{id}/permanent`.
pub const TASK_PERMANENTLY_DELETED: &str = "Task permanently deleted";

type ApiResult<T> = Result<T, ApiError>;

fn parse_task_id(raw: &str) -> ApiResult<TaskId> {
    raw.parse::<TaskId>().map_err(|err| {
        tracing::debug!(error = %err, "rejected task identifier");
        ApiError::bad_request("Invalid task id")
    })
}

fn validated_content(input: &TaskInput) -> ApiResult<TaskContent> {
    TaskContent::from_input(input).map_err(|report| ApiError::validation(&report))
}

/// `GET /tasks`: every task, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] when the tasks cannot be loaded.
pub async fn list_tasks<R, C>(State(state): State<AppState<R, C>>) -> ApiResult<Json<Vec<Task>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state
        .service
        .list_all()
        .await
        .map(Json)
        .map_err(|err| ApiError::from_lifecycle(Operation::ListTasks, err))
}

/// `GET /tasks/{id}`: a single task.
///
/// # Errors
///
/// Returns 404 when the task does not exist and 400 for malformed ids.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Task>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    state
        .service
        .find_by_id(id)
        .await
        .map(Json)
        .map_err(|err| ApiError::from_lifecycle(Operation::FetchTask, err))
}

/// `POST /tasks`: creates an active task and echoes it with 201.
///
/// # Errors
///
/// Returns 400 with every validation message when the input is invalid.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    JsonBody(input): JsonBody<TaskInput>,
) -> ApiResult<(StatusCode, Json<Task>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let content = validated_content(&input)?;
    let task = state
        .service
        .create(content)
        .await
        .map_err(|err| ApiError::from_lifecycle(Operation::CreateTask, err))?;
    tracing::info!(task_id = %task.id(), "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}`: replaces title and description.
///
/// # Errors
///
/// Returns 400 for invalid input and 404 for unknown tasks.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<TaskInput>,
) -> ApiResult<Json<MessageResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let content = validated_content(&input)?;
    state
        .service
        .update(id, content)
        .await
        .map_err(|err| ApiError::from_lifecycle(Operation::UpdateTask, err))?;
    Ok(Json(MessageResponse::new(TASK_UPDATED)))
}

/// `PUT /tasks/{id}/status`: moves a task to the requested status.
///
/// # Errors
///
/// Returns 400 for unknown statuses or forbidden transitions and 404 for
/// unknown tasks.
pub async fn update_task_status<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<StatusChangeRequest>,
) -> ApiResult<Json<MessageResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let request = TransitionTaskRequest::new(id, coerce_to_text(body.status.as_ref()));
    state
        .service
        .transition_task(request)
        .await
        .map_err(|err| ApiError::from_lifecycle(Operation::UpdateStatus, err))?;
    Ok(Json(MessageResponse::new(TASK_STATUS_UPDATED)))
}

/// `DELETE /tasks/{id}`: moves a task to the trash.
///
/// # Errors
///
/// Returns 404 for unknown tasks.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    state
        .service
        .soft_delete(id)
        .await
        .map_err(|err| ApiError::from_lifecycle(Operation::DeleteTask, err))?;
    Ok(Json(MessageResponse::new(TASK_DELETED)))
}

/// `PUT /tasks/{id}/restore`: brings a task back from the trash.
///
/// # Errors
///
/// Returns 404 for unknown tasks.
pub async fn restore_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    state
        .service
        .restore(id)
        .await
        .map_err(|err| ApiError::from_lifecycle(Operation::RestoreTask, err))?;
    Ok(Json(MessageResponse::new(TASK_RESTORED)))
}

/// `DELETE /tasks/{id}/permanent`: removes a task for good.
///
/// # Errors
///
/// Returns 404 for unknown tasks.
pub async fn permanently_delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    state
        .service
        .permanent_delete(id)
        .await
        .map_err(|err| ApiError::from_lifecycle(Operation::PermanentlyDeleteTask, err))?;
    tracing::info!(task_id = %id, "task permanently deleted");
    Ok(Json(MessageResponse::new(TASK_PERMANENTLY_DELETED)))
}
