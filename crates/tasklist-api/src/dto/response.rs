//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tasklist_core::types::{TaskListId, ToDoId, UserId};
use tasklist_entity::todo::ToDo;
use tasklist_entity::user::User;
use tasklist_service::auth::AuthPayload;
use tasklist_service::task_list::{TaskListDetail, TaskListView};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Active store backend.
    pub store: String,
}

/// Public user fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Avatar reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        }
    }
}

/// Sign-up / sign-in response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The signed-in user.
    pub user: UserResponse,
    /// Identity token for the `Authorization` header.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

impl From<AuthPayload> for AuthResponse {
    fn from(payload: AuthPayload) -> Self {
        Self {
            user: payload.user.into(),
            token: payload.token.token,
            expires_at: payload.token.expires_at,
        }
    }
}

/// To-do item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToDoResponse {
    /// To-do ID.
    pub id: ToDoId,
    /// Text.
    pub content: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Owning list.
    pub task_list_id: TaskListId,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<ToDo> for ToDoResponse {
    fn from(todo: ToDo) -> Self {
        Self {
            id: todo.id,
            content: todo.content,
            is_completed: todo.is_completed,
            task_list_id: todo.task_list_id,
            created_at: todo.created_at,
        }
    }
}

/// Task list summary with derived progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Task list ID.
    pub id: TaskListId,
    /// Title.
    pub title: String,
    /// Collaborator IDs; the first is the creator.
    pub collaborators: Vec<UserId>,
    /// Completed fraction in `[0.0, 1.0]`.
    pub progress: f64,
    /// Completed to-dos.
    pub completed_count: u32,
    /// All to-dos.
    pub todo_count: u32,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<TaskListView> for TaskListResponse {
    fn from(view: TaskListView) -> Self {
        Self {
            id: view.task_list.id,
            title: view.task_list.title,
            collaborators: view.task_list.collaborators,
            progress: view.progress.ratio(),
            completed_count: view.progress.completed,
            todo_count: view.progress.total,
            created_at: view.task_list.created_at,
        }
    }
}

/// Task list with its to-dos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListDetailResponse {
    /// List fields.
    #[serde(flatten)]
    pub task_list: TaskListResponse,
    /// To-dos, oldest first.
    pub todos: Vec<ToDoResponse>,
}

impl From<TaskListDetail> for TaskListDetailResponse {
    fn from(detail: TaskListDetail) -> Self {
        let view = TaskListView {
            task_list: detail.task_list,
            progress: detail.progress,
        };
        Self {
            task_list: view.into(),
            todos: detail.todos.into_iter().map(Into::into).collect(),
        }
    }
}
