//! Error types for the tc-app shell layer.

/// Shell error type. Everything except `Io` is a validation failure that the
/// sessions render as a user-facing message instead of propagating.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0:?}")]
    InvalidInput(String),

    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),

    #[error(transparent)]
    Core(#[from] tc_core::TcError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Line printed to the user when a session rejects its input.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(_) => "Invalid input".to_string(),
            AppError::InvalidChoice(_) => "Invalid choice".to_string(),
            AppError::Core(err) => format!("Invalid input: {err}"),
            AppError::Io(err) => format!("I/O error: {err}"),
        }
    }
}
