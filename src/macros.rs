//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a scan start snapshot
//! - `MK_ERROR!` - Creates a line-tagged `Error`

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's payload (`TokenValue`)
/// * `$start` - The `TokenStart` taken when the scan began
/// * `$end` - Inclusive byte offset of the token's last byte
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, TokenValue::Text(text), start, end);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $start.line,
            start: $start.index,
            end: $end,
        }
    };
}

/// Creates an `Error` for the given kind at the given line.
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::UnterminatedStringLiteral, start.line));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $line:expr) => {
        Error::new($kind, $line)
    };
}
