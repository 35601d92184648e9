use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_ERROR,
};

use super::{
    scanners::{self, Scanner},
    stream::CharStream,
    symbols::{
        is_digit, is_identifier_start, is_punctuation, is_whitespace, CodeDelimiter,
        CommentMarker, TextDelimiter, COMMENT_LOOKUP,
    },
    tokens::{Token, TokenKind, TokenValue},
};

/// Lazily lexes tokens from a `CharStream`.
///
/// The iterator is single pass and stops for good after the first error. An
/// interpolation lexer shares the enclosing template's stream and ends at the
/// `}` that balances the `${` it was started for.
pub struct Lexer<'s> {
    stream: &'s mut CharStream,
    depth: Option<usize>,
    closed: bool,
    failed: bool,
    expects_operand: bool,
}

impl<'s> Lexer<'s> {
    pub fn new(stream: &'s mut CharStream) -> Lexer<'s> {
        Lexer {
            stream,
            depth: None,
            closed: false,
            failed: false,
            expects_operand: true,
        }
    }

    pub fn interpolation(stream: &'s mut CharStream) -> Lexer<'s> {
        Lexer {
            depth: Some(1),
            ..Lexer::new(stream)
        }
    }

    /// True once an interpolation lexer has seen its closing brace.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn text_delimiter(&self, c: char) -> Option<TextDelimiter> {
        let mut buffer = [0; 4];

        TextDelimiter::from_quote(c.encode_utf8(&mut buffer))
            .or_else(|| self.stream.window(2).and_then(TextDelimiter::from_quote))
    }

    /// The longest comment marker starting at the current character. Wider
    /// windows are only tried while enough input remains.
    fn comment_marker(&self) -> Option<CommentMarker> {
        let mut found = None;

        for width in 1..=CommentMarker::MAX_WIDTH {
            let Some(window) = self.stream.window(width) else {
                break;
            };

            if let Some(marker) = COMMENT_LOOKUP.get(window) {
                found = Some(*marker);
            }
        }

        found
    }

    fn scan(&mut self, scanner: Scanner) -> Option<Result<Token, Error>> {
        Some(scanner(self.stream))
    }

    /// Selects and runs the scanner for the character just consumed. `None`
    /// means the character produced no token.
    fn dispatch(&mut self, c: char) -> Option<Result<Token, Error>> {
        if is_digit(c) {
            return self.scan(scanners::number);
        }

        if let Some(delimiter) = self.text_delimiter(c) {
            return match delimiter {
                TextDelimiter::DoubleQuote | TextDelimiter::SingleQuote => {
                    self.scan(scanners::plain_string)
                }
                TextDelimiter::Backtick => self.scan(scanners::template_string),
                TextDelimiter::RegexBacktick | TextDelimiter::RegexSlash => {
                    Some(scanners::regex(self.stream, delimiter))
                }
            };
        }

        if let Some(marker) = self.comment_marker() {
            return Some(scanners::comment(self.stream, marker));
        }

        if c == '/' && self.expects_operand {
            return Some(scanners::regex(self.stream, TextDelimiter::RegexSlash));
        }

        if is_identifier_start(c) {
            return self.scan(scanners::word);
        }

        if is_punctuation(c) {
            return self.scan(scanners::symbol);
        }

        if is_whitespace(c) {
            return None;
        }

        Some(Err(MK_ERROR!(
            ErrorImpl::InvalidCharacter { character: c },
            self.stream.line_number()
        )))
    }

    /// Tracks interpolation brace depth. Returns true when `token` is the
    /// closing brace of the interpolation.
    fn closes_interpolation(&mut self, token: &Token) -> bool {
        let Some(depth) = self.depth.as_mut() else {
            return false;
        };

        match token.kind {
            TokenKind::CodeDelimiter(CodeDelimiter::OpenCurly) => *depth += 1,
            TokenKind::CodeDelimiter(CodeDelimiter::CloseCurly) => *depth -= 1,
            _ => {}
        }

        *depth == 0
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.closed {
            return None;
        }

        loop {
            let c = self.stream.advance_next().ok()?;

            let Some(result) = self.dispatch(c) else {
                continue;
            };

            let token = match result {
                Ok(token) => token,
                Err(error) => {
                    debug!(line = error.get_line(), "lexing stopped: {}", error);
                    self.failed = true;
                    return Some(Err(error));
                }
            };

            if !token.kind.is_comment() {
                self.expects_operand = token.kind.expects_operand();
            }

            if self.closes_interpolation(&token) {
                self.closed = true;
                return None;
            }

            trace!(kind = %token.kind, line = token.line, start = token.start, "token");
            return Some(Ok(token));
        }
    }
}

/// Tokens lexed before lexing stopped, and the error that stopped it.
#[derive(Debug, Clone, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub error: Option<Error>,
    failed_at: (usize, usize),
}

impl LexOutput {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Vec<Token>, Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }

    /// The tokens, followed by an `Error` token describing the failure if
    /// lexing did not complete.
    pub fn into_tokens(self) -> Vec<Token> {
        let mut tokens = self.tokens;

        if let Some(error) = self.error {
            let (start, end) = self.failed_at;
            tokens.push(Token {
                kind: TokenKind::Error,
                value: TokenValue::Text(error.to_string()),
                line: error.get_line(),
                start,
                end,
            });
        }

        tokens
    }
}

pub fn lex_stream(stream: &mut CharStream) -> Lexer<'_> {
    Lexer::new(stream)
}

pub fn lex(source: &str) -> LexOutput {
    let mut stream = CharStream::new(source);
    let mut tokens = vec![];
    let mut error = None;

    for result in lex_stream(&mut stream) {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => {
                error = Some(err);
                break;
            }
        }
    }

    let failed_at = match (stream.current_index(), stream.end_index()) {
        (Some(start), Some(end)) => (start, end),
        _ => (0, 0),
    };

    debug!(tokens = tokens.len(), failed = error.is_some(), "lexing finished");
    LexOutput {
        tokens,
        error,
        failed_at,
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    lex(source).into_result()
}
