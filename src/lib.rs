#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::printer::render;
pub use parser::parser::parse;

/// Byte offsets into the source, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Finds the line containing byte `position` of `source`.
///
/// Returns the 1-based line number, the line's text and the offset of
/// `position` within it. Positions at or past the end of the source point
/// just after the last character.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}


/// Renders a diagnostic with the offending source line and a caret under
/// the token it points at.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message (tip)
        -> main.mk
          |
        2 | let = 5;
          | ----^
    */

    let (line, line_text, line_pos) = get_line_at_position(source, error.get_position());

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error),
        tip => format!("Error: {} ({})\n", error, tip),
    };
    rendered.push_str(&format!("-> {}\n", file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let caret_offset = line_pos.max(removed_whitespace);
    let arrows = line_text[removed_whitespace..caret_offset].chars().count() + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    rendered
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
