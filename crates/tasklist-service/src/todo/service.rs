//! To-do creation and listing.

use std::sync::Arc;

use tracing::info;

use tasklist_auth::acl::CollaboratorChecker;
use tasklist_core::error::AppError;
use tasklist_core::types::TaskListId;
use tasklist_database::store::ToDoStore;
use tasklist_entity::todo::{CreateToDo, ToDo};

use crate::context::RequestContext;

/// Manages to-dos. Access follows the owning list's collaborators.
#[derive(Debug, Clone)]
pub struct ToDoService {
    todos: Arc<dyn ToDoStore>,
    checker: Arc<CollaboratorChecker>,
}

impl ToDoService {
    /// Creates a new to-do service.
    pub fn new(todos: Arc<dyn ToDoStore>, checker: Arc<CollaboratorChecker>) -> Self {
        Self { todos, checker }
    }

    /// Adds an incomplete to-do to a task list.
    pub async fn create_to_do(
        &self,
        ctx: &RequestContext,
        task_list_id: TaskListId,
        content: &str,
    ) -> Result<ToDo, AppError> {
        let user = ctx.require_user()?;
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::validation("Content must not be empty"));
        }
        self.checker
            .require_collaborator(task_list_id, user.id)
            .await?;

        let todo = self
            .todos
            .create(&CreateToDo {
                content: content.to_string(),
                task_list_id,
            })
            .await?;

        info!(todo_id = %todo.id, task_list_id = %task_list_id, "To-do created");
        Ok(todo)
    }

    /// Lists a task list's to-dos, oldest first.
    pub async fn list_to_dos(
        &self,
        ctx: &RequestContext,
        task_list_id: TaskListId,
    ) -> Result<Vec<ToDo>, AppError> {
        let user = ctx.require_user()?;
        self.checker
            .require_collaborator(task_list_id, user.id)
            .await?;
        self.todos.find_by_task_list(task_list_id).await
    }
}
