//! Random password generation for the passgen workspace.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod generator;

pub use generator::{
    PasswordGen, DIGITS, LETTERS_LOWER, LETTERS_UPPER, SYMBOLS,
};
