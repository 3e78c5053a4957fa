//! To-do repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use tasklist_core::error::{AppError, ErrorKind};
use tasklist_core::result::AppResult;
use tasklist_core::types::TaskListId;
use tasklist_entity::todo::{CreateToDo, ToDo};

use crate::store::ToDoStore;

/// Repository for to-do items.
#[derive(Debug, Clone)]
pub struct ToDoRepository {
    pool: PgPool,
}

impl ToDoRepository {
    /// Create a new to-do repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToDoStore for ToDoRepository {
    async fn create(&self, data: &CreateToDo) -> AppResult<ToDo> {
        sqlx::query_as::<_, ToDo>(
            "INSERT INTO todos (content, task_list_id) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(&data.content)
        .bind(data.task_list_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Task list {} not found", data.task_list_id))
            }
            other => AppError::with_source(ErrorKind::Database, "Failed to create to-do", other),
        })
    }

    async fn find_by_task_list(&self, task_list_id: TaskListId) -> AppResult<Vec<ToDo>> {
        sqlx::query_as::<_, ToDo>(
            "SELECT * FROM todos WHERE task_list_id = $1 ORDER BY created_at ASC",
        )
        .bind(task_list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list to-dos", e))
    }
}
