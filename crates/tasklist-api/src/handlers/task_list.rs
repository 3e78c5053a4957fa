//! Task list handlers.

use axum::Json;
use axum::extract::{Path, State};

use tasklist_core::types::TaskListId;

use crate::dto::request::{AddCollaboratorRequest, CreateTaskListRequest, UpdateTaskListRequest};
use crate::dto::response::{
    ApiResponse, MessageResponse, TaskListDetailResponse, TaskListResponse,
};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/task-lists
pub async fn my_task_lists(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<TaskListResponse>>>, ApiError> {
    let views = state
        .task_list_service
        .my_task_lists(user.context())
        .await?;

    Ok(Json(ApiResponse::ok(
        views.into_iter().map(Into::into).collect(),
    )))
}

/// POST /api/task-lists
pub async fn create_task_list(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<CreateTaskListRequest>,
) -> Result<Json<ApiResponse<TaskListResponse>>, ApiError> {
    let view = state
        .task_list_service
        .create_task_list(user.context(), &req.title)
        .await?;

    Ok(Json(ApiResponse::ok(view.into())))
}

/// GET /api/task-lists/{id}
pub async fn get_task_list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TaskListDetailResponse>>, ApiError> {
    let id: TaskListId = parse_id(&id)?;
    let detail = state
        .task_list_service
        .get_task_list(user.context(), id)
        .await?;

    Ok(Json(ApiResponse::ok(detail.into())))
}

/// PUT /api/task-lists/{id}
pub async fn update_task_list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateTaskListRequest>,
) -> Result<Json<ApiResponse<TaskListResponse>>, ApiError> {
    let id: TaskListId = parse_id(&id)?;
    let view = state
        .task_list_service
        .update_task_list(user.context(), id, &req.title)
        .await?;

    Ok(Json(ApiResponse::ok(view.into())))
}

/// DELETE /api/task-lists/{id}
pub async fn delete_task_list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id: TaskListId = parse_id(&id)?;
    state
        .task_list_service
        .delete_task_list(user.context(), id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Task list deleted".to_string(),
    })))
}

/// POST /api/task-lists/{id}/collaborators
pub async fn add_collaborator(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<AddCollaboratorRequest>,
) -> Result<Json<ApiResponse<TaskListResponse>>, ApiError> {
    let id: TaskListId = parse_id(&id)?;
    let view = state
        .task_list_service
        .add_user_to_task_list(user.context(), id, req.user_id)
        .await?;

    Ok(Json(ApiResponse::ok(view.into())))
}
