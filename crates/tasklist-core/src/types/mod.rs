//! Core type definitions used across the TaskList workspace.

pub mod id;

pub use id::*;
