//! Store traits implemented by the PostgreSQL repositories and the
//! in-memory store.
//!
//! Services depend on these traits only, so the backend is chosen once at
//! startup (see [`Stores`]) and tests run against [`MemoryStore`].

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use tasklist_core::result::AppResult;
use tasklist_core::types::{TaskListId, UserId};
use tasklist_entity::task_list::{CreateTaskList, TaskList};
use tasklist_entity::todo::{CreateToDo, ToDo};
use tasklist_entity::user::{CreateUser, User};

use crate::memory::MemoryStore;
use crate::repositories::{TaskListRepository, ToDoRepository, UserRepository};

/// Credential store.
#[async_trait]
pub trait UserStore: Send + Sync + Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user.
    ///
    /// Fails with a `Conflict` error when the email is already registered.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Task list records and their collaborator sets.
#[async_trait]
pub trait TaskListStore: Send + Sync + Debug + 'static {
    /// Find a task list by primary key.
    async fn find_by_id(&self, id: TaskListId) -> AppResult<Option<TaskList>>;

    /// All lists whose collaborator set contains `user_id`, newest first.
    async fn find_for_collaborator(&self, user_id: UserId) -> AppResult<Vec<TaskList>>;

    /// Insert a new list with the creator as its sole collaborator.
    async fn create(&self, data: &CreateTaskList) -> AppResult<TaskList>;

    /// Replace the title. Returns `None` when the list does not exist.
    async fn update_title(&self, id: TaskListId, title: &str) -> AppResult<Option<TaskList>>;

    /// Append `user_id` to the collaborator set unless already present.
    ///
    /// The check and the append happen as one atomic step. Returns the
    /// list as stored afterwards, or `None` when it does not exist.
    async fn add_collaborator(
        &self,
        id: TaskListId,
        user_id: UserId,
    ) -> AppResult<Option<TaskList>>;

    /// Delete a list and its to-dos. Returns `true` if a list was removed.
    async fn delete(&self, id: TaskListId) -> AppResult<bool>;
}

/// To-do records, looked up by their owning list.
#[async_trait]
pub trait ToDoStore: Send + Sync + Debug + 'static {
    /// Insert a new, incomplete to-do.
    async fn create(&self, data: &CreateToDo) -> AppResult<ToDo>;

    /// All to-dos of a list, oldest first.
    async fn find_by_task_list(&self, task_list_id: TaskListId) -> AppResult<Vec<ToDo>>;
}

/// The three stores, wired to one backend.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Credential store.
    pub users: Arc<dyn UserStore>,
    /// Task list store.
    pub task_lists: Arc<dyn TaskListStore>,
    /// To-do store.
    pub todos: Arc<dyn ToDoStore>,
}

impl Stores {
    /// Stores backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            task_lists: Arc::new(TaskListRepository::new(pool.clone())),
            todos: Arc::new(ToDoRepository::new(pool)),
        }
    }

    /// Stores backed by a single shared in-memory store.
    pub fn memory() -> Self {
        Self::from_memory(MemoryStore::new())
    }

    /// Stores backed by an existing in-memory store.
    pub fn from_memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            task_lists: store.clone(),
            todos: store,
        }
    }
}
