#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    config::InterpreterConfig,
    errors::{
        errors::{Error, ErrorTip},
        sink::DiagnosticSink,
    },
    runtime::environment::SymbolTable,
};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod runtime;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs one interpretation session over `source` and returns the final symbol table.
///
/// Every diagnostic raised while scanning, parsing or evaluating goes to `sink`;
/// none of them stop the session early unless the scanner gives up on a literal
/// or `config` asks the parser to halt on the first mismatch.
pub fn interpret(
    source: &str,
    file: Option<String>,
    config: InterpreterConfig,
    sink: &mut dyn DiagnosticSink,
) -> SymbolTable {
    parser::parser::parse(source, file, config, sink)
}

/// Finds the line holding byte offset `position`.
///
/// Returns the 1-based line number, the line text and the column (in characters)
/// of `position` within that line. An offset exactly one past the end of the
/// source is accepted so errors reported at end of input can still be located.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() || !content.is_char_boundary(pos) {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line[..pos - start].chars().count();
            return Some((line_number, line.to_string(), column));
        }

        start = end;
        line_number += 1;
        last_line = line;
    }

    if content.is_empty() || content.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last_line.to_string(), last_line.chars().count()))
    }
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> source.txt
           |
        20 | int a = #;
           | --------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}", position.1));

    if let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) {
        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        out.push_str(&format!("\n{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    }

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
