//! # tasklist-service
//!
//! Business logic service layer for TaskList. Each service orchestrates
//! the stores and the auth primitives to implement one group of
//! operations, and every protected operation starts from a
//! [`RequestContext`].
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod task_list;
pub mod todo;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{AuthPayload, AuthService, SignUpInput};
pub use context::RequestContext;
pub use task_list::{TaskListDetail, TaskListService, TaskListView};
pub use todo::ToDoService;
