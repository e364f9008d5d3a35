//! Unit tests for error handling.
//!
//! This module contains tests for error values and error reporting.

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

fn at_line(line: u32) -> Position {
    Position(line, Rc::new("test.shl".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '%' },
        at_line(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ";".to_string(),
            message: "Expected symbol".to_string(),
        },
        at_line(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_file_read_error_is_io() {
    let error = Error::new(
        ErrorImpl::FileRead {
            path: "missing.shl".to_string(),
            message: "No such file or directory".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "FileRead");
    assert_eq!(error.kind(), ErrorKind::Io);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_unexpected_token_tip_quotes_the_token() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "{".to_string(),
            message: "Expected closing ')'".to_string(),
        },
        at_line(3),
    );

    let tip = error.get_tip().to_string();
    assert!(tip.contains("`{`"));
    assert!(tip.contains("Expected closing ')'"));
}

#[test]
fn test_syntax_error_display_includes_line() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        at_line(7),
    );

    let message = error.to_string();
    assert!(message.contains("line 7"));
    assert!(message.contains("test.shl"));
}

#[test]
fn test_chained_comparison_error() {
    let error = Error::new(ErrorImpl::ChainedComparison, at_line(1));
    assert_eq!(error.get_error_name(), "ChainedComparison");
    assert_eq!(error.kind(), ErrorKind::Syntax);
}
