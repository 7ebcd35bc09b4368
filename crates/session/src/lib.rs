//! Session controller for the password generator.
//!
//! The controller is the sole owner of the configuration, the
//! current password and the bounded history. It validates the
//! configuration before generating, persists the history through an
//! injected storage provider, copies through an injected clipboard
//! provider and surfaces transient notices that clear themselves
//! after a fixed timeout.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod notice;
mod session;

pub use error::Error;
pub use notice::Notice;
pub use session::{validate, SessionController};
