use thiserror::Error;

/// Application error types.
///
/// The signal engine itself never fails; these cover request validation and
/// the binary's input handling.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the caller sent something invalid, as opposed to a local failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::BadRequest(_) | AppError::SerdeJson(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
