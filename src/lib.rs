#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod ir;
pub mod lexer;
pub mod parser;

extern crate regex;

/// A source position: 1-based line number plus the name of the file it
/// came from (`<string>` for in-memory parses).
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} in {}", self.0, self.1)
    }
}

/// Return the text of the given 1-based line of a file, if both the
/// file and the line exist.
pub fn get_line(file: &Path, lineno: u32) -> Option<String> {
    let content = fs::read_to_string(file).ok()?;
    let index = lineno.checked_sub(1)? as usize;
    content.lines().nth(index).map(String::from)
}

pub fn display_error(error: &Error, file: &Path) {
    /*
        Error: UnexpectedToken (Unexpected token `{`, Expected closing ')')
        -> scratch.shl
           |
        20 | if (1 {
           |
    */

    match error.get_tip() {
        ErrorTip::None => println!("Error: {}", error.get_error_name()),
        tip => println!("Error: {} ({})", error.get_error_name(), tip),
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    let lineno = error.get_position().0;
    if let Some(line_text) = get_line(file, lineno) {
        let line_string = lineno.to_string();
        let padding = line_string.len() + 2;

        println!("{:>padding$}", "|");
        println!("{} | {}", line_string, line_text.trim());
        println!("{:>padding$}", "|");
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    #[test]
    fn test_get_line() {
        let path = PathBuf::from("tests/test_file.txt");
        assert_eq!(super::get_line(&path, 1), Some("Hello, world!".to_string()));
        assert_eq!(super::get_line(&path, 4), Some("Testing { }".to_string()));
        assert_eq!(super::get_line(&path, 99), None);
        assert_eq!(super::get_line(&path, 0), None);
    }

    #[test]
    fn test_get_line_missing_file() {
        let path = PathBuf::from("tests/does_not_exist.txt");
        assert_eq!(super::get_line(&path, 1), None);
    }
}
