//! To-do item domain entities.

pub mod model;

pub use model::{CreateToDo, ToDo};
