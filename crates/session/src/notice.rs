use crate::Error;
use std::fmt;

/// Transient user-facing status notice.
///
/// Notices never stack; a new notice replaces the current one and
/// every notice clears itself after a fixed timeout.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Notice {
    /// No character class is enabled.
    NoCharsetSelected,
    /// Password length is missing or below the minimum.
    LengthTooShort,
    /// There is no current password to copy.
    NothingToCopy,
    /// The current password was copied to the clipboard.
    PasswordCopied,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCharsetSelected => {
                write!(f, "{}", Error::NoCharsetSelected)
            }
            Self::LengthTooShort => write!(f, "{}", Error::LengthTooShort),
            Self::NothingToCopy => write!(f, "{}", Error::NothingToCopy),
            Self::PasswordCopied => {
                write!(f, "Password Copied to Clipboard!")
            }
        }
    }
}

impl From<&Error> for Notice {
    fn from(value: &Error) -> Self {
        match value {
            Error::NoCharsetSelected => Self::NoCharsetSelected,
            Error::LengthTooShort => Self::LengthTooShort,
            Error::NothingToCopy => Self::NothingToCopy,
        }
    }
}
