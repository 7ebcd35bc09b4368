//! Core types and constants for the passgen workspace.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod clipboard;
mod config;
pub mod constants;

pub use clipboard::{ClipboardProvider, ClipboardSink};
pub use config::Config;

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Default non-cryptographic RNG for password generation.
///
/// Generation is explicitly not security-grade. Callers that need
/// deterministic output inject their own [Rng] instead.
pub fn rng() -> impl Rng {
    SmallRng::from_entropy()
}
