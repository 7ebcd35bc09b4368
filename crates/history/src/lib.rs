//! Bounded history of generated passwords with pluggable
//! storage providers.
//!
//! The history is a most-recent-first list capped at five entries,
//! persisted wholesale as a JSON document. Storage is abstracted
//! behind [HistoryStorage] so the session controller can be backed
//! by a file on disc or by memory in tests.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod fs;
mod history;
mod memory;

pub use error::Error;
pub use fs::JsonHistoryProvider;
pub use history::{HistoryList, HistoryStorage, HistoryStorageProvider};
pub use memory::MemoryHistoryProvider;

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;
