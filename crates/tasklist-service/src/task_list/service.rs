//! Task list CRUD and collaborator management.

use std::sync::Arc;

use tracing::info;

use tasklist_auth::acl::CollaboratorChecker;
use tasklist_core::error::AppError;
use tasklist_core::types::{TaskListId, UserId};
use tasklist_database::store::{TaskListStore, ToDoStore, UserStore};
use tasklist_entity::task_list::{CreateTaskList, Progress, TaskList};
use tasklist_entity::todo::ToDo;

use crate::context::RequestContext;

/// Manages task lists.
#[derive(Debug, Clone)]
pub struct TaskListService {
    /// Task list store.
    task_lists: Arc<dyn TaskListStore>,
    /// To-do store, for progress and detail views.
    todos: Arc<dyn ToDoStore>,
    /// Credential store, for collaborator lookups.
    users: Arc<dyn UserStore>,
    /// Collaborator check.
    checker: Arc<CollaboratorChecker>,
}

/// A task list with its derived progress.
#[derive(Debug, Clone)]
pub struct TaskListView {
    /// The stored list.
    pub task_list: TaskList,
    /// Completion progress.
    pub progress: Progress,
}

/// A task list with its to-dos and derived progress.
#[derive(Debug, Clone)]
pub struct TaskListDetail {
    /// The stored list.
    pub task_list: TaskList,
    /// To-dos, oldest first.
    pub todos: Vec<ToDo>,
    /// Completion progress.
    pub progress: Progress,
}

impl TaskListService {
    /// Creates a new task list service.
    pub fn new(
        task_lists: Arc<dyn TaskListStore>,
        todos: Arc<dyn ToDoStore>,
        users: Arc<dyn UserStore>,
        checker: Arc<CollaboratorChecker>,
    ) -> Self {
        Self {
            task_lists,
            todos,
            users,
            checker,
        }
    }

    /// Lists every task list the acting user collaborates on, newest first.
    pub async fn my_task_lists(&self, ctx: &RequestContext) -> Result<Vec<TaskListView>, AppError> {
        let user = ctx.require_user()?;
        let lists = self.task_lists.find_for_collaborator(user.id).await?;

        let mut views = Vec::with_capacity(lists.len());
        for list in lists {
            views.push(self.view(list).await?);
        }
        Ok(views)
    }

    /// Gets one task list with its to-dos.
    pub async fn get_task_list(
        &self,
        ctx: &RequestContext,
        id: TaskListId,
    ) -> Result<TaskListDetail, AppError> {
        let user = ctx.require_user()?;
        let task_list = self.checker.require_collaborator(id, user.id).await?;

        let todos = self.todos.find_by_task_list(id).await?;
        let progress = Progress::from_todos(&todos);
        Ok(TaskListDetail {
            task_list,
            todos,
            progress,
        })
    }

    /// Creates a task list with the acting user as its sole collaborator.
    pub async fn create_task_list(
        &self,
        ctx: &RequestContext,
        title: &str,
    ) -> Result<TaskListView, AppError> {
        let user = ctx.require_user()?;
        let title = validate_title(title)?;

        let list = self
            .task_lists
            .create(&CreateTaskList {
                title: title.to_string(),
                created_by: user.id,
            })
            .await?;

        info!(task_list_id = %list.id, user_id = %user.id, "Task list created");

        Ok(TaskListView {
            task_list: list,
            progress: Progress::default(),
        })
    }

    /// Renames a task list.
    pub async fn update_task_list(
        &self,
        ctx: &RequestContext,
        id: TaskListId,
        title: &str,
    ) -> Result<TaskListView, AppError> {
        let user = ctx.require_user()?;
        let title = validate_title(title)?;
        self.checker.require_collaborator(id, user.id).await?;

        let list = self
            .task_lists
            .update_title(id, title)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task list {id} not found")))?;

        info!(task_list_id = %id, user_id = %user.id, "Task list renamed");

        self.view(list).await
    }

    /// Adds a user to a task list's collaborators. Adding an existing
    /// collaborator is a no-op.
    pub async fn add_user_to_task_list(
        &self,
        ctx: &RequestContext,
        id: TaskListId,
        user_id: UserId,
    ) -> Result<TaskListView, AppError> {
        let actor = ctx.require_user()?;
        self.checker.require_collaborator(id, actor.id).await?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        let list = self
            .task_lists
            .add_collaborator(id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Task list {id} not found")))?;

        info!(
            task_list_id = %id,
            user_id = %user_id,
            added_by = %actor.id,
            "Collaborator added"
        );

        self.view(list).await
    }

    /// Deletes a task list and its to-dos.
    pub async fn delete_task_list(
        &self,
        ctx: &RequestContext,
        id: TaskListId,
    ) -> Result<(), AppError> {
        let user = ctx.require_user()?;
        self.checker.require_collaborator(id, user.id).await?;

        if !self.task_lists.delete(id).await? {
            return Err(AppError::not_found(format!("Task list {id} not found")));
        }

        info!(task_list_id = %id, user_id = %user.id, "Task list deleted");
        Ok(())
    }

    async fn view(&self, task_list: TaskList) -> Result<TaskListView, AppError> {
        let todos = self.todos.find_by_task_list(task_list.id).await?;
        Ok(TaskListView {
            progress: Progress::from_todos(&todos),
            task_list,
        })
    }
}

/// Trims a title and rejects blank ones.
pub(crate) fn validate_title(title: &str) -> Result<&str, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::validation("Title must not be empty"));
    }
    Ok(title)
}
