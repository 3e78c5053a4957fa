//! Task list repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use tasklist_core::error::{AppError, ErrorKind};
use tasklist_core::result::AppResult;
use tasklist_core::types::{TaskListId, UserId};
use tasklist_entity::task_list::{CreateTaskList, TaskList};

use crate::store::TaskListStore;

/// Repository for task lists. Collaborators live in a `uuid[]` column.
#[derive(Debug, Clone)]
pub struct TaskListRepository {
    pool: PgPool,
}

impl TaskListRepository {
    /// Create a new task list repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskListStore for TaskListRepository {
    async fn find_by_id(&self, id: TaskListId) -> AppResult<Option<TaskList>> {
        sqlx::query_as::<_, TaskList>("SELECT * FROM task_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find task list by id", e)
            })
    }

    async fn find_for_collaborator(&self, user_id: UserId) -> AppResult<Vec<TaskList>> {
        sqlx::query_as::<_, TaskList>(
            "SELECT * FROM task_lists WHERE collaborators @> ARRAY[$1]::uuid[] \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list task lists for user", e)
        })
    }

    async fn create(&self, data: &CreateTaskList) -> AppResult<TaskList> {
        sqlx::query_as::<_, TaskList>(
            "INSERT INTO task_lists (title, collaborators) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(vec![data.created_by])
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task list", e))
    }

    async fn update_title(&self, id: TaskListId, title: &str) -> AppResult<Option<TaskList>> {
        sqlx::query_as::<_, TaskList>(
            "UPDATE task_lists SET title = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task list", e))
    }

    async fn add_collaborator(
        &self,
        id: TaskListId,
        user_id: UserId,
    ) -> AppResult<Option<TaskList>> {
        let updated = sqlx::query_as::<_, TaskList>(
            "UPDATE task_lists SET collaborators = array_append(collaborators, $2) \
             WHERE id = $1 AND NOT (collaborators @> ARRAY[$2]::uuid[]) \
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to add collaborator", e)
        })?;

        match updated {
            Some(list) => Ok(Some(list)),
            // Either the user was already a collaborator or the list is gone.
            None => self.find_by_id(id).await,
        }
    }

    async fn delete(&self, id: TaskListId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM task_lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete task list", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
