//! Error types for the tb-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives frontends a single error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Invalid form input: {0}")]
    Form(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tb-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<tb_project::ProjectError> for AppError {
    fn from(err: tb_project::ProjectError) -> Self {
        match err {
            tb_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<tb_project::ValidationError> for AppError {
    fn from(err: tb_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<tb_project::FormError> for AppError {
    fn from(err: tb_project::FormError) -> Self {
        AppError::Form(err.to_string())
    }
}

impl From<tb_balance::BalanceError> for AppError {
    fn from(err: tb_balance::BalanceError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
