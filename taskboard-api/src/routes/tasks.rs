/// Task management and assignment endpoints
///
/// # Endpoints
///
/// - `POST /tasks` - Create a task (always unassigned)
/// - `GET /tasks` - List tasks
/// - `GET /tasks/{id}` - Fetch a task
/// - `DELETE /tasks/{id}` - Delete a task
/// - `PUT /tasks/{id}/assign/{user_id}` - Assign to a user
/// - `PUT /tasks/{id}/unassign` - Clear the assignment

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::users::MessageResponse,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::{
    task::{CreateTask, Task},
    user::User,
};
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
}

/// Create a new task
///
/// The task starts unassigned.
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// { "title": "Complete project" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "title": "Complete project", "assigned_to": null }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: title missing or empty
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate()?;

    let task = Task::create(&state.db, CreateTask { title: req.title }).await?;

    Ok(Json(task))
}

/// List all tasks in insertion order
///
/// # Endpoint
///
/// ```text
/// GET /tasks
/// ```
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;

    Ok(Json(tasks))
}

/// Fetch a single task
///
/// # Endpoint
///
/// ```text
/// GET /tasks/{id}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no task with this id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Delete a task
///
/// Never blocked by assignment state; nothing references a task. Deleting
/// a task that does not exist still reports success (zero rows affected).
///
/// # Endpoint
///
/// ```text
/// DELETE /tasks/{id}
/// ```
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    Task::delete(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Task deleted".to_string(),
    }))
}

/// Assign a task to a user
///
/// Overwrites any prior assignment without requiring an unassign first;
/// assigning the same user twice is idempotent. The user existence check
/// and the update are two statements and not atomic as a unit; if the user
/// is deleted in between, the foreign-key constraint rejects the update.
///
/// # Endpoint
///
/// ```text
/// PUT /tasks/{id}/assign/{user_id}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: task or user does not exist
pub async fn assign_task(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i64, i64)>,
) -> ApiResult<Json<MessageResponse>> {
    // Task is checked before user so the error names the right entity
    // when both are missing.
    if Task::find_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    if User::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Task::assign(&state.db, id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(MessageResponse {
        message: "Task assigned".to_string(),
    }))
}

/// Clear a task's assignment
///
/// A no-op when the task is already unassigned.
///
/// # Endpoint
///
/// ```text
/// PUT /tasks/{id}/unassign
/// ```
///
/// # Errors
///
/// - `404 Not Found`: task does not exist
pub async fn unassign_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    Task::unassign(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(MessageResponse {
        message: "Task unassigned".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_fails_validation() {
        let req = CreateTaskRequest {
            title: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nonempty_title_passes_validation() {
        let req = CreateTaskRequest {
            title: "Complete project".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
