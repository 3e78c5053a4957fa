//! Collaborator-based access control on task lists.

pub mod checker;

pub use checker::CollaboratorChecker;
