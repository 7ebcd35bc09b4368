//! Random password generator with history and clipboard copy.
pub mod commands;
mod error;

pub use error::Error;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, Error>;

use etcetera::{choose_base_strategy, BaseStrategy};
use std::path::PathBuf;

/// Resolve the directory containing the history document.
pub fn data_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir);
    }
    let strategy = choose_base_strategy()?;
    Ok(strategy.data_dir().join("passgen"))
}
