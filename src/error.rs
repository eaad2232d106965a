use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from reading datasets, config or the log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal initialization or rendering errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Dataset file is not valid JSON for the entry schema.
    #[error("Dataset parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries in a dataset share the same id.
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),

    /// A file entry carries a children list.
    #[error("File entry {0} has children")]
    FileWithChildren(String),

    /// Invalid path provided by the user.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
