//! Convenience result type alias for TaskList.

use crate::error::AppError;

/// A specialized `Result` type for TaskList operations.
pub type AppResult<T> = Result<T, AppError>;
