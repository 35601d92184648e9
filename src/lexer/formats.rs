//! Shape predicates for literal spellings.
//!
//! Each predicate matches a whole candidate string. Scanners accumulate
//! characters greedily first and only then ask whether the result is well
//! formed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^(?:[A-Za-z][A-Za-z0-9_]*|_[A-Za-z0-9_]+)$").unwrap();
    static ref FLOAT_OR_INT: Regex =
        Regex::new("^(?:(?:0|[1-9][0-9]*)(?:\\.[0-9]*)?|\\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap();
    static ref BIGINT: Regex = Regex::new("^(?:0|[1-9][0-9]*)n$").unwrap();
    static ref HEX: Regex = Regex::new("^0[xX][0-9a-fA-F]+n?$").unwrap();
    static ref OCTAL: Regex = Regex::new("^0[oO][0-7]+n?$").unwrap();
    static ref BINARY: Regex = Regex::new("^0[bB][01]+n?$").unwrap();
    static ref ESCAPE_SEQUENCE: Regex = Regex::new(
        "^\\\\(?:[nrtbfv0'\"\\\\`$/]|x[0-9a-fA-F]{2}|u[0-9a-fA-F]{4}|u\\{[0-9a-fA-F]{1,6}\\})$"
    )
    .unwrap();
}

pub struct Formats;

impl Formats {
    /// A lone `_` is not an identifier; it is reserved as the placeholder keyword.
    pub fn is_identifier(candidate: &str) -> bool {
        IDENTIFIER.is_match(candidate)
    }

    pub fn is_float_or_int(candidate: &str) -> bool {
        FLOAT_OR_INT.is_match(candidate)
    }

    pub fn is_bigint(candidate: &str) -> bool {
        BIGINT.is_match(candidate)
    }

    pub fn is_hex(candidate: &str) -> bool {
        HEX.is_match(candidate)
    }

    pub fn is_octal(candidate: &str) -> bool {
        OCTAL.is_match(candidate)
    }

    pub fn is_binary(candidate: &str) -> bool {
        BINARY.is_match(candidate)
    }

    pub fn is_number(candidate: &str) -> bool {
        Formats::is_float_or_int(candidate)
            || Formats::is_bigint(candidate)
            || Formats::is_hex(candidate)
            || Formats::is_octal(candidate)
            || Formats::is_binary(candidate)
    }

    pub fn is_valid_escape_sequence(candidate: &str) -> bool {
        ESCAPE_SEQUENCE.is_match(candidate)
    }

    /// Decodes the escapes of a raw string payload. Returns `None` if any
    /// backslash sequence is not a valid escape.
    pub fn unescape(raw: &str) -> Option<String> {
        let mut result = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(slash) = rest.find('\\') {
            result.push_str(&rest[..slash]);
            rest = &rest[slash..];

            let length = escape_length(rest)?;
            result.push(decode_escape(&rest[..length])?);
            rest = &rest[length..];
        }

        result.push_str(rest);
        Some(result)
    }
}

/// Byte length of the longest valid escape sequence at the start of `rest`.
fn escape_length(rest: &str) -> Option<usize> {
    let ends = rest
        .char_indices()
        .skip(1)
        .take(10)
        .map(|(index, c)| index + c.len_utf8());

    ends.filter(|end| Formats::is_valid_escape_sequence(&rest[..*end]))
        .last()
}

fn decode_escape(sequence: &str) -> Option<char> {
    let body = &sequence[1..];

    match body {
        "n" => Some('\n'),
        "r" => Some('\r'),
        "t" => Some('\t'),
        "b" => Some('\u{8}'),
        "f" => Some('\u{c}'),
        "v" => Some('\u{b}'),
        "0" => Some('\0'),
        _ if body.starts_with("u{") => {
            u32::from_str_radix(body.trim_start_matches("u{").trim_end_matches('}'), 16)
                .ok()
                .and_then(char::from_u32)
        }
        _ if body.starts_with('x') || body.starts_with('u') => {
            u32::from_str_radix(&body[1..], 16).ok().and_then(char::from_u32)
        }
        _ => body.chars().next(),
    }
}
