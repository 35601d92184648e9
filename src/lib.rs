#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Returns the text of the 1-based `line` in `content`, without its line
/// terminator.
pub fn get_line(content: &str, line: usize) -> Option<&str> {
    content
        .split_inclusive('\n')
        .nth(line.checked_sub(1)?)
        .map(|text| text.trim_end_matches(['\n', '\r']))
}


/// Formats an error the way `display_error` prints it.
pub fn render_error(error: &Error, file: &Path, content: &str) -> String {
    /*
        Error: name (tip)
        -> final.lang
           |
        20 | let a = #;
    */

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line(content, error.get_line()) {
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }

    out
}

pub fn display_error(error: &Error, file: &Path, content: &str) {
    print!("{}", render_error(error, file, content));
}
