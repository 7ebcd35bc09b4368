use thiserror::Error;

/// Errors generated by the history library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated when converting to or from JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
