use thiserror::Error;

/// Errors generated by the session library.
///
/// All variants are recoverable user-input conditions; the error
/// messages double as the user-facing notice text.
#[derive(Debug, Error)]
pub enum Error {
    /// No character class is enabled in the configuration.
    #[error("Select at least one checkbox.")]
    NoCharsetSelected,

    /// Password length is missing or below the minimum.
    #[error("Please enter password length of min 6")]
    LengthTooShort,

    /// There is no current password to copy.
    #[error("Please Generate Password to Copy!")]
    NothingToCopy,
}
