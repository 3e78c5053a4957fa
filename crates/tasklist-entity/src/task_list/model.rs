//! Task list entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tasklist_core::types::{TaskListId, UserId};

/// A shared list of to-do items.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskList {
    /// Unique task list identifier.
    pub id: TaskListId,
    /// List title.
    pub title: String,
    /// Users allowed to read and mutate the list. The first entry is the creator.
    pub collaborators: Vec<UserId>,
    /// When the list was created.
    pub created_at: DateTime<Utc>,
}

impl TaskList {
    /// Check whether the given user is a collaborator on this list.
    pub fn has_collaborator(&self, user_id: UserId) -> bool {
        self.collaborators.contains(&user_id)
    }

    /// The user who created the list, if the collaborator set is non-empty.
    pub fn creator(&self) -> Option<UserId> {
        self.collaborators.first().copied()
    }
}

/// Data required to create a new task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskList {
    /// List title.
    pub title: String,
    /// The creating user, who becomes the sole initial collaborator.
    pub created_by: UserId,
}
