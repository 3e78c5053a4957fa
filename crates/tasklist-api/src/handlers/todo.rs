//! To-do handlers.

use axum::Json;
use axum::extract::{Path, State};

use tasklist_core::types::TaskListId;

use crate::dto::request::CreateToDoRequest;
use crate::dto::response::{ApiResponse, ToDoResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/task-lists/{id}/todos
pub async fn list_to_dos(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ToDoResponse>>>, ApiError> {
    let id: TaskListId = parse_id(&id)?;
    let todos = state
        .todo_service
        .list_to_dos(user.context(), id)
        .await?;

    Ok(Json(ApiResponse::ok(
        todos.into_iter().map(Into::into).collect(),
    )))
}

/// POST /api/task-lists/{id}/todos
pub async fn create_to_do(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateToDoRequest>,
) -> Result<Json<ApiResponse<ToDoResponse>>, ApiError> {
    let id: TaskListId = parse_id(&id)?;
    let todo = state
        .todo_service
        .create_to_do(user.context(), id, &req.content)
        .await?;

    Ok(Json(ApiResponse::ok(todo.into())))
}
