//! Error types and error handling for the front end.
//!
//! This module defines the error values returned by the parser. It
//! includes:
//!
//! - An error structure carrying source position information
//! - Specific error variants for I/O and syntax failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
