//! Collaborator check shared by every task-list operation.

use std::sync::Arc;

use tasklist_core::error::AppError;
use tasklist_core::types::{TaskListId, UserId};
use tasklist_database::store::TaskListStore;
use tasklist_entity::task_list::TaskList;

/// Loads a task list and verifies the caller collaborates on it.
#[derive(Debug, Clone)]
pub struct CollaboratorChecker {
    task_lists: Arc<dyn TaskListStore>,
}

impl CollaboratorChecker {
    /// Creates a new checker.
    pub fn new(task_lists: Arc<dyn TaskListStore>) -> Self {
        Self { task_lists }
    }

    /// Returns the list when `user_id` is one of its collaborators.
    ///
    /// A missing list is `NotFound`; an existing list the user is not on
    /// is `Authorization`.
    pub async fn require_collaborator(
        &self,
        task_list_id: TaskListId,
        user_id: UserId,
    ) -> Result<TaskList, AppError> {
        let list = self
            .task_lists
            .find_by_id(task_list_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task list {task_list_id} not found")))?;

        if !list.has_collaborator(user_id) {
            return Err(AppError::authorization(
                "You are not a collaborator on this task list",
            ));
        }
        Ok(list)
    }
}
