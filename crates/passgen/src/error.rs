use thiserror::Error;

/// Errors generated by the command line.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated by the session library.
    #[error(transparent)]
    Session(#[from] passgen_session::Error),

    /// Error generated by the history library.
    #[error(transparent)]
    History(#[from] passgen_history::Error),

    /// Error generated by the clipboard library.
    #[error(transparent)]
    Clipboard(#[from] passgen_clipboard::Error),

    /// Error generated resolving the user's data directory.
    #[error(transparent)]
    HomeDir(#[from] etcetera::HomeDirError),

    /// Error generated by input/output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
