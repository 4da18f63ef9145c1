/// Task endpoints
///
/// # Endpoints
///
/// - `GET /tasks` - List tasks in insertion order
/// - `POST /tasks` - Append a batch of tasks (201)
/// - `DELETE /tasks` - Remove every task whose id is in the body
/// - `GET /tasks/:id` - Fetch the first task with this id
/// - `DELETE /tasks/:id` - Remove the first task with this id
///
/// Ids are supplied by the caller and never deduplicated.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
};
use axum::{extract::State, http::StatusCode, Json};
use classroom_shared::models::task::Task;

/// Message returned when no task carries the requested id
pub const TASK_NOT_FOUND: &str = "Task not found";

fn not_found() -> ApiError {
    ApiError::NotFound(TASK_NOT_FOUND.to_string())
}

/// Lists every task
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

/// Appends a batch of tasks
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// [{ "id": 1, "title": "Lire le chapitre 2", "completed": false }]
/// ```
///
/// # Response
///
/// `201 Created` with the appended tasks, in request order.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: body is not an array of complete tasks
pub async fn create_tasks(
    State(state): State<AppState>,
    ApiJson(tasks): ApiJson<Vec<Task>>,
) -> (StatusCode, Json<Vec<Task>>) {
    let created = state.tasks.insert_many(tasks).await;
    tracing::info!(count = created.len(), "created tasks");

    (StatusCode::CREATED, Json(created))
}

/// Fetches one task
///
/// # Errors
///
/// - `404 Not Found`: "Task not found"
pub async fn get_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Task>> {
    state.tasks.find(&id).await.map(Json).ok_or_else(not_found)
}

/// Removes one task and returns it
///
/// # Errors
///
/// - `404 Not Found`: "Task not found" (nothing is removed)
pub async fn delete_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Task>> {
    let removed = state.tasks.remove(&id).await.ok_or_else(not_found)?;
    tracing::info!(task_id = id, "deleted task");

    Ok(Json(removed))
}

/// Removes every task whose id appears in the body
///
/// # Endpoint
///
/// ```text
/// DELETE /tasks
/// Content-Type: application/json
///
/// [1, 2, 999]
/// ```
///
/// Unknown ids are ignored. The removed tasks come back in their original
/// collection order.
pub async fn delete_tasks(
    State(state): State<AppState>,
    ApiJson(ids): ApiJson<Vec<i64>>,
) -> Json<Vec<Task>> {
    let removed = state.tasks.remove_many(&ids).await;
    tracing::info!(requested = ids.len(), removed = removed.len(), "deleted tasks");

    Json(removed)
}
