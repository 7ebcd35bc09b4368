use passgen_core::Config;
use passgen_session::{validate, Error};

#[test]
fn validate_rejects_empty_charset() {
    let config = Config {
        length: Some(8),
        digits: false,
        letters: false,
        symbols: false,
    };
    assert!(matches!(validate(&config), Err(Error::NoCharsetSelected)));
}

#[test]
fn validate_charset_error_wins_over_length() {
    let config = Config {
        length: Some(5),
        digits: false,
        letters: false,
        symbols: false,
    };
    assert!(matches!(validate(&config), Err(Error::NoCharsetSelected)));
}

#[test]
fn validate_rejects_short_length() {
    let config = Config {
        length: Some(5),
        ..Default::default()
    };
    assert!(matches!(validate(&config), Err(Error::LengthTooShort)));
}

#[test]
fn validate_rejects_missing_length() {
    let config = Config {
        length: None,
        ..Default::default()
    };
    assert!(matches!(validate(&config), Err(Error::LengthTooShort)));
}

#[test]
fn validate_accepts_minimum_length_single_class() {
    let config = Config {
        length: Some(6),
        digits: true,
        letters: false,
        symbols: false,
    };
    assert!(validate(&config).is_ok());
}

#[test]
fn validate_messages_match_notices() {
    assert_eq!(
        "Select at least one checkbox.",
        Error::NoCharsetSelected.to_string()
    );
    assert_eq!(
        "Please enter password length of min 6",
        Error::LengthTooShort.to_string()
    );
    assert_eq!(
        "Please Generate Password to Copy!",
        Error::NothingToCopy.to_string()
    );
}
