//! # tasklist-entity
//!
//! Domain entity models for TaskList. Every struct in this crate
//! represents a stored record or the data needed to create one. Stored
//! records additionally derive `sqlx::FromRow` and carry typed IDs from
//! `tasklist-core`.

pub mod task_list;
pub mod todo;
pub mod user;
