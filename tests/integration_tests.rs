//! Integration tests for the public parse entry points.
//!
//! These drive the full pipeline — file reading, tokenization, parsing,
//! scope resolution — through the same API an embedding type checker or
//! code generator would use.

use std::fs;

use shale::{
    errors::errors::ErrorKind,
    ir::nodes::{Expr, Stmt},
    parser::parser::{parse, parse_string},
};

#[test]
fn test_parse_example_script() {
    let module = parse("tests/scripts/greet.shl").unwrap();

    let greet = module.get_function("greet").expect("greet should be hoisted");
    assert_eq!(greet.args.len(), 1);
    assert_eq!(module.variable(greet.args[0]).name, "name");

    // target assignment, the call, and the if statement.
    assert_eq!(module.main.body.statements.len(), 3);
    match &module.main.body.statements[1] {
        Stmt::Expr(Expr::Call { name, args }) => {
            assert_eq!(name, "greet");
            assert_eq!(args.len(), 1);
        }
        other => panic!("expected call statement, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_file() {
    let error = parse("tests/scripts/does_not_exist.shl").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Io);
}

#[test]
fn test_parse_bad_script_reports_line() {
    let error = parse("tests/scripts/bad.shl").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_position().0, 3);
    assert_eq!(&**error.get_position().1, "bad.shl");
}

#[test]
fn test_parse_matches_parse_string() {
    let text = fs::read_to_string("tests/scripts/greet.shl").unwrap();
    let from_path = parse("tests/scripts/greet.shl").unwrap();
    let from_text = parse_string(&text).unwrap();
    assert_eq!(from_path, from_text);
}
