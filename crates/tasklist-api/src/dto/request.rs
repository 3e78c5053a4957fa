//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tasklist_core::types::UserId;

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password. Length policy is enforced by the auth service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Avatar reference.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create task list request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskListRequest {
    /// Title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
}

/// Update task list request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTaskListRequest {
    /// New title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
}

/// Add collaborator request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCollaboratorRequest {
    /// User to add.
    pub user_id: UserId,
}

/// Create to-do request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateToDoRequest {
    /// To-do text.
    #[validate(length(min = 1, max = 1000, message = "Content must be 1-1000 characters"))]
    pub content: String,
}
