//! # tasklist-database
//!
//! Record store access for TaskList: the store traits the services
//! depend on, their PostgreSQL repository implementations, and an
//! in-memory implementation for tests and single-process runs.

pub mod memory;
mod postgres;
pub mod repositories;
pub mod store;

pub use memory::MemoryStore;
pub use store::{Stores, TaskListStore, ToDoStore, UserStore};
