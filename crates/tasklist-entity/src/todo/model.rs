//! To-do entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tasklist_core::types::{TaskListId, ToDoId};

/// A checkable item under a task list.
///
/// The list is referenced by id only; lists find their to-dos by reverse query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ToDo {
    /// Unique to-do identifier.
    pub id: ToDoId,
    /// Item text.
    pub content: String,
    /// Whether the item has been checked off.
    pub is_completed: bool,
    /// The list this item belongs to.
    pub task_list_id: TaskListId,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new to-do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateToDo {
    /// Item text.
    pub content: String,
    /// Owning task list.
    pub task_list_id: TaskListId,
}
