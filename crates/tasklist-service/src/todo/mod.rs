//! To-do operations scoped to a task list.

pub mod service;

pub use service::ToDoService;
