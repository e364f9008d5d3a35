use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A failed parse. Wraps the concrete failure with the source position
/// it was detected at; parsing stops at the first error and no partial
/// module is ever produced.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The two classes of failure a parse can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Syntax,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::FileRead { .. } => ErrorKind::Io,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileRead { .. } => "FileRead",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ChainedComparison => "ChainedComparison",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileRead { .. } => ErrorTip::None,
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ChainedComparison => ErrorTip::Suggestion(String::from(
                "only one `==` is allowed per expression; parenthesize the first comparison",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ErrorKind::Io => write!(f, "{}", self.internal_error),
            ErrorKind::Syntax => write!(
                f,
                "{} near line {} in {}",
                self.internal_error, self.position.0, self.position.1
            ),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("failed to read {path:?}: {message}")]
    FileRead { path: String, message: String },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedToken { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("comparisons cannot be chained")]
    ChainedComparison,
}
