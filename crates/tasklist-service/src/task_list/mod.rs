//! Task list operations gated by collaborator membership.

pub mod service;

pub use service::{TaskListDetail, TaskListService, TaskListView};
