//! Derived completion progress of a task list.

use serde::{Deserialize, Serialize};

use crate::todo::ToDo;

/// Completion summary computed from a list's to-dos. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Progress {
    /// Number of completed to-dos.
    pub completed: u32,
    /// Total number of to-dos.
    pub total: u32,
}

impl Progress {
    /// Summarize a slice of to-dos.
    pub fn from_todos(todos: &[ToDo]) -> Self {
        let completed = todos.iter().filter(|t| t.is_completed).count();
        Self {
            completed: saturating_u32(completed),
            total: saturating_u32(todos.len()),
        }
    }

    /// Completed fraction in `[0.0, 1.0]`; an empty list reports `0.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed) / f64::from(self.total)
        }
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
