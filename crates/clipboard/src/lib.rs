//! Clipboard providers for the passgen workspace.
//!
//! [NativeClipboard] writes to the system clipboard; the
//! [MemoryClipboard] double records the last written text so tests
//! can assert on copy behavior.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod memory;
mod native;

pub use error::Error;
pub use memory::MemoryClipboard;
pub use native::NativeClipboard;

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;
