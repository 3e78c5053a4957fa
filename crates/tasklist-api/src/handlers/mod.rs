//! Route handlers organized by domain.

pub mod auth;
pub mod health;
pub mod task_list;
pub mod todo;
