//! In-memory store using a Tokio mutex for single-process deployments.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use tasklist_core::error::AppError;
use tasklist_core::result::AppResult;
use tasklist_core::types::{TaskListId, ToDoId, UserId};
use tasklist_entity::task_list::{CreateTaskList, TaskList};
use tasklist_entity::todo::{CreateToDo, ToDo};
use tasklist_entity::user::{CreateUser, User};

use crate::store::{TaskListStore, ToDoStore, UserStore};

/// Internal state for the memory store.
#[derive(Debug, Default)]
struct InnerState {
    users: HashMap<UserId, User>,
    /// Insertion order, oldest first.
    task_lists: Vec<TaskList>,
    /// Insertion order, oldest first.
    todos: Vec<ToDo>,
}

/// In-memory implementation of every store trait.
///
/// All three record kinds share one lock, so each trait method is atomic
/// with respect to every other. Suitable for tests and single-node runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<InnerState>>,
}

impl MemoryStore {
    /// Creates an empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().await;

        if state
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }

        let user = User {
            id: UserId::new(),
            email: data.email.clone(),
            name: data.name.clone(),
            password_hash: data.password_hash.clone(),
            avatar: data.avatar.clone(),
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl TaskListStore for MemoryStore {
    async fn find_by_id(&self, id: TaskListId) -> AppResult<Option<TaskList>> {
        let state = self.state.lock().await;
        Ok(state.task_lists.iter().find(|l| l.id == id).cloned())
    }

    async fn find_for_collaborator(&self, user_id: UserId) -> AppResult<Vec<TaskList>> {
        let state = self.state.lock().await;
        Ok(state
            .task_lists
            .iter()
            .rev()
            .filter(|l| l.has_collaborator(user_id))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateTaskList) -> AppResult<TaskList> {
        let mut state = self.state.lock().await;
        let list = TaskList {
            id: TaskListId::new(),
            title: data.title.clone(),
            collaborators: vec![data.created_by],
            created_at: Utc::now(),
        };
        state.task_lists.push(list.clone());
        Ok(list)
    }

    async fn update_title(&self, id: TaskListId, title: &str) -> AppResult<Option<TaskList>> {
        let mut state = self.state.lock().await;
        Ok(state.task_lists.iter_mut().find(|l| l.id == id).map(|list| {
            list.title = title.to_string();
            list.clone()
        }))
    }

    async fn add_collaborator(
        &self,
        id: TaskListId,
        user_id: UserId,
    ) -> AppResult<Option<TaskList>> {
        let mut state = self.state.lock().await;
        Ok(state.task_lists.iter_mut().find(|l| l.id == id).map(|list| {
            if !list.has_collaborator(user_id) {
                list.collaborators.push(user_id);
            }
            list.clone()
        }))
    }

    async fn delete(&self, id: TaskListId) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.task_lists.len();
        state.task_lists.retain(|l| l.id != id);
        let removed = state.task_lists.len() < before;

        if removed {
            let todos_before = state.todos.len();
            state.todos.retain(|t| t.task_list_id != id);
            debug!(
                task_list_id = %id,
                todos_removed = todos_before - state.todos.len(),
                "Cascaded task list delete"
            );
        }

        Ok(removed)
    }
}

#[async_trait]
impl ToDoStore for MemoryStore {
    async fn create(&self, data: &CreateToDo) -> AppResult<ToDo> {
        let mut state = self.state.lock().await;

        if !state.task_lists.iter().any(|l| l.id == data.task_list_id) {
            return Err(AppError::not_found(format!(
                "Task list {} not found",
                data.task_list_id
            )));
        }

        let todo = ToDo {
            id: ToDoId::new(),
            content: data.content.clone(),
            is_completed: false,
            task_list_id: data.task_list_id,
            created_at: Utc::now(),
        };
        state.todos.push(todo.clone());
        Ok(todo)
    }

    async fn find_by_task_list(&self, task_list_id: TaskListId) -> AppResult<Vec<ToDo>> {
        let state = self.state.lock().await;
        Ok(state
            .todos
            .iter()
            .filter(|t| t.task_list_id == task_list_id)
            .cloned()
            .collect())
    }
}
