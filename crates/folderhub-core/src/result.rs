//! Convenience result type alias for FolderHub.

use crate::error::AppError;

/// A specialized `Result` type for FolderHub operations.
pub type AppResult<T> = Result<T, AppError>;
