//! Subcommands for the command line.
pub mod generate;
pub mod history;

use crate::Error;
use passgen_clipboard::NativeClipboard;
use passgen_core::constants::HISTORY_FILE;
use passgen_history::JsonHistoryProvider;
use passgen_session::SessionController;
use std::path::Path;

/// Create a session backed by the history document in the
/// data directory and the native clipboard.
pub(crate) fn new_session(data_dir: &Path) -> SessionController<Error> {
    let storage = Box::new(JsonHistoryProvider::new(
        data_dir.join(HISTORY_FILE),
    ));
    let clipboard = Box::new(NativeClipboard::new());
    SessionController::new(storage, clipboard)
}
