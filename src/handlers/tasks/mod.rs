// handlers/tasks/mod.rs - Task manager CRUD routes
//
// Shape validation lives on the payload types (`NewTask`, `TaskUpdate`, `Page`);
// these handlers only translate between HTTP and the `TaskStore`.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::ValidJson;
use crate::error::ApiError;
use crate::state::TaskState;
use crate::tasks::{NewTask, Page, Task, TaskUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteAllQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

fn task_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    let Path(id) = path?;
    Ok(id)
}

/// POST /tasks/ - create a task
pub async fn create_task(
    State(state): State<TaskState>,
    ValidJson(new_task): ValidJson<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.store.create(new_task).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/:id - fetch one task
pub async fn get_task(
    State(state): State<TaskState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let id = task_id(path)?;
    Ok(Json(state.store.get(id).await?))
}

/// GET /tasks/?skip&limit - paginated list in insertion order
pub async fn list_tasks(
    State(state): State<TaskState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<TaskList>, ApiError> {
    let Query(query) = query?;
    let page = Page::from_query(query.skip, query.limit, &state.limits)?;
    Ok(Json(TaskList {
        tasks: state.store.list(page).await,
    }))
}

/// PUT /tasks/:id - partial update
pub async fn update_task(
    State(state): State<TaskState>,
    path: Result<Path<u64>, PathRejection>,
    ValidJson(update): ValidJson<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    let id = task_id(path)?;
    Ok(Json(state.store.update(id, update).await?))
}

/// DELETE /tasks/:id
pub async fn delete_task(
    State(state): State<TaskState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = task_id(path)?;
    state.store.delete(id).await?;
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}

/// DELETE /tasks/?confirm=true - remove every task
pub async fn delete_all_tasks(
    State(state): State<TaskState>,
    query: Result<Query<DeleteAllQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    if !query.confirm {
        return Err(ApiError::bad_request(
            "Confirmation required to delete all tasks. Pass confirm=true.",
        ));
    }

    let deleted = state.store.clear().await;
    tracing::warn!("Deleted all tasks ({} removed)", deleted);
    Ok(Json(json!({
        "message": "All tasks deleted successfully",
        "deleted": deleted,
    })))
}
