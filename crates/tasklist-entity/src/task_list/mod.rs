//! Task list domain entities.

pub mod model;
pub mod progress;

pub use model::{CreateTaskList, TaskList};
pub use progress::Progress;
