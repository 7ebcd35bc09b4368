//! Shared helpers for the unit tests.
use passgen_clipboard::MemoryClipboard;
use passgen_history::MemoryHistoryProvider;
use passgen_session::SessionController;
use thiserror::Error;

/// Application error aggregating the library errors, in the shape
/// an embedding application would use.
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
}

/// Create a session backed by in-memory providers, returning
/// handles to the storage and clipboard doubles.
pub fn memory_session() -> (
    SessionController<Error>,
    MemoryHistoryProvider<Error>,
    MemoryClipboard<Error>,
) {
    let storage = MemoryHistoryProvider::default();
    let clipboard = MemoryClipboard::new();
    let session = SessionController::new(
        Box::new(storage.clone()),
        Box::new(clipboard.clone()),
    );
    (session, storage, clipboard)
}
