//! Integration tests for end-to-end interpretation.
//!
//! These tests drive complete programs through the public `interpret` entry
//! point and check the final symbol table and the diagnostics reported.

use minic::{
    config::{InterpreterConfig, RecoveryPolicy, SkipMode},
    errors::{
        errors::{Error, ErrorImpl},
        sink::Diagnostics,
    },
    interpret,
    lexer::{lexer::tokenize, tokens::TokenKind},
    render_error,
    runtime::{environment::SymbolTable, value::Value},
};

fn run(source: &str) -> (SymbolTable, Vec<Error>) {
    let mut diagnostics = Diagnostics::new();
    let symbols = interpret(
        source,
        Some("test.c".to_string()),
        InterpreterConfig::default(),
        &mut diagnostics,
    );
    (symbols, diagnostics.into_errors())
}

#[test]
fn test_declarations_and_true_branch() {
    let (symbols, errors) = run("int x = 5; char c = 'a'; if (x > 3) { x = x + 1; }");

    assert!(errors.is_empty());
    assert_eq!(symbols.get("x"), Ok(Value::Integer(6)));
    assert_eq!(symbols.get("c"), Ok(Value::Character('a')));
    assert_eq!(symbols.len(), 2);
}

#[test]
fn test_false_branch_is_skipped() {
    let (symbols, errors) = run("int x = 5; if (x > 10) { x = 100; }");

    assert!(errors.is_empty());
    assert_eq!(symbols.get("x"), Ok(Value::Integer(5)));
}

#[test]
fn test_parenthesized_precedence() {
    let (symbols, errors) = run("int x = 2 * (3 + 4);");

    assert!(errors.is_empty());
    assert_eq!(symbols.get("x"), Ok(Value::Integer(14)));
}

#[test]
fn test_undeclared_variable_reads_as_zero() {
    let (symbols, errors) = run("y = y + 1;");

    assert_eq!(symbols.get("y"), Ok(Value::Integer(1)));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::UndeclaredVariable {
            variable: "y".to_string()
        }
    );
    assert_eq!(errors[0].get_position().0, 4);
}

#[test]
fn test_lookup_of_absent_variable() {
    let (symbols, _) = run("int x = 1;");

    assert_eq!(
        symbols.get("nope"),
        Err(ErrorImpl::UndeclaredVariable {
            variable: "nope".to_string()
        })
    );
}

#[test]
fn test_sessions_are_deterministic() {
    let source = "int a = 7 / 2; int b = a + 0.5; char c = 'z'; \
                  if (b >= 3.5) { a = a * 10; } if (c == c) { a = 0; } q = missing;";

    let (first, first_errors) = run(source);
    let (second, second_errors) = run(source);

    assert_eq!(first, second);
    assert_eq!(first_errors, second_errors);
    assert_eq!(first.get("a"), Ok(Value::Integer(30)));
    assert_eq!(first.get("b"), Ok(Value::Float(3.5)));
}

#[test]
fn test_mixed_program() {
    let source = "
        int total = 10;
        int rate = 2.5;
        total = total * rate;
        char grade = 'B';
        if (total >= 25) {
            grade = 'A';
        }
        if (total < 0) {
            grade = 'F';
        }
    ";
    let (symbols, errors) = run(source);

    assert!(errors.is_empty());
    assert_eq!(symbols.get("total"), Ok(Value::Float(25.0)));
    assert_eq!(symbols.get("grade"), Ok(Value::Character('A')));
}

#[test]
fn test_character_operands_are_rejected() {
    let (symbols, errors) = run("char c = 'a'; int n = c + 1; if (c > 1) { n = 99; }");

    assert_eq!(symbols.get("n"), Ok(Value::Integer(0)));
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|error| error.get_error_name() == "UnsupportedOperandType"));
}

#[test]
fn test_halt_policy() {
    let mut diagnostics = Diagnostics::new();
    let symbols = interpret(
        "int a = 1; int b 2; int c = 3;",
        None,
        InterpreterConfig::new(RecoveryPolicy::Halt, SkipMode::Flat),
        &mut diagnostics,
    );

    assert_eq!(symbols.get("a"), Ok(Value::Integer(1)));
    assert!(!symbols.contains("b"));
    assert!(!symbols.contains("c"));
    assert_eq!(diagnostics.count("UnexpectedToken"), 1);
}

#[test]
fn test_invalid_character_terminates_program() {
    let (symbols, errors) = run("int a = 1; int b = a # 2; int c = 3;");

    assert_eq!(symbols.get("a"), Ok(Value::Integer(1)));
    assert_eq!(symbols.get("b"), Ok(Value::Integer(1)));
    assert!(!symbols.contains("c"));
    assert_eq!(errors[0].get_error_name(), "InvalidCharacter");
}

#[test]
fn test_tokenize_program() {
    let (tokens, errors) = tokenize("if (x != 1) { }", None);

    assert!(errors.is_empty());
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_render_diagnostic() {
    let source = "int x = 1;\nx = x / 0;\n";
    let (_, errors) = run(source);

    assert_eq!(errors.len(), 1);
    let rendered = render_error(&errors[0], source);
    assert_eq!(
        rendered,
        "Error: DivisionByZero\n-> test.c\n  |\n2 | x = x / 0;\n  | ------^"
    );
}
