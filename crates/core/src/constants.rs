//! Constants for the passgen workspace.

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: u16 = 6;

/// Maximum number of entries retained in the password history.
pub const HISTORY_LIMIT: usize = 5;

/// Milliseconds a transient notice stays visible before it
/// clears itself.
pub const NOTICE_TIMEOUT_MILLIS: u64 = 2000;

/// File name of the persisted history document.
pub const HISTORY_FILE: &str = "history.json";
