//! One scanner per lexical category.
//!
//! The driver has already consumed the first character of the token when a
//! scanner is called, so every scanner starts by taking a `TokenStart`
//! snapshot of the current position.

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_ERROR, MK_TOKEN,
};

use super::{
    formats::Formats,
    lexer::Lexer,
    stream::{CharStream, TokenStart},
    symbols::{
        is_operator_char, is_reg_char, CommentMarker, TextDelimiter, DELIMITER_LOOKUP,
        KEYWORD_LOOKUP, OPERATOR_LOOKUP, REGEX_FLAGS, TEMPLATE_ARGUMENT_START,
    },
    tokens::{RegexLiteral, TemplateLiteral, Token, TokenKind, TokenValue},
};

pub type Scanner = fn(&mut CharStream) -> Result<Token, Error>;

fn begin(stream: &CharStream) -> Result<TokenStart, Error> {
    stream
        .start_token()
        .map_err(|eof| MK_ERROR!(eof.into(), stream.line_number()))
}

fn end_of(stream: &CharStream, start: &TokenStart) -> usize {
    stream.end_index().unwrap_or(start.index)
}

/// Consumes the next character, failing with `kind` at `line` when the input
/// runs out.
fn advance_or(stream: &mut CharStream, kind: ErrorImpl, line: usize) -> Result<char, Error> {
    stream.advance_next().map_err(|_| MK_ERROR!(kind, line))
}

pub fn number(stream: &mut CharStream) -> Result<Token, Error> {
    let start = begin(stream)?;
    let mut token = String::from(start.first);
    let mut last = start.first;

    while let Ok(next) = stream.peek(1) {
        let exponent_sign = matches!(next, '+' | '-') && matches!(last, 'e' | 'E');
        let decimal_point = next == '.' && !token.contains('.') && stream.peek(2) != Ok('.');

        if !(is_reg_char(next) || exponent_sign || decimal_point) {
            break;
        }

        last = advance_or(stream, ErrorImpl::UnexpectedEndOfInput, start.line)?;
        token.push(last);
    }

    if !Formats::is_number(&token) {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidNumberLiteral { literal: token },
            stream.line_number()
        ));
    }

    let end = end_of(stream, &start);
    Ok(MK_TOKEN!(TokenKind::Number, TokenValue::Text(token), start, end))
}

pub fn word(stream: &mut CharStream) -> Result<Token, Error> {
    let start = begin(stream)?;
    let mut token = String::from(start.first);

    while let Ok(next) = stream.peek(1) {
        if !is_reg_char(next) {
            break;
        }
        token.push(advance_or(stream, ErrorImpl::UnexpectedEndOfInput, start.line)?);
    }

    let kind = if let Some(operator) = OPERATOR_LOOKUP.get(token.as_str()) {
        TokenKind::Operator(*operator)
    } else if let Some(keyword) = KEYWORD_LOOKUP.get(token.as_str()) {
        TokenKind::Keyword(*keyword)
    } else {
        TokenKind::Identifier
    };

    let end = end_of(stream, &start);
    Ok(MK_TOKEN!(kind, TokenValue::Text(token), start, end))
}

pub fn symbol(stream: &mut CharStream) -> Result<Token, Error> {
    let start = begin(stream)?;

    if let Ok(next) = stream.peek(1) {
        if Formats::is_number(&format!("{}{}", start.first, next)) {
            return number(stream);
        }
    }

    if let Some(delimiter) = DELIMITER_LOOKUP.get(&start.first) {
        return Ok(MK_TOKEN!(
            TokenKind::CodeDelimiter(*delimiter),
            TokenValue::Text(start.first.to_string()),
            start,
            start.index
        ));
    }

    let mut token = String::from(start.first);
    while let Ok(next) = stream.peek(1) {
        if !is_operator_char(next) {
            break;
        }
        token.push(advance_or(stream, ErrorImpl::UnexpectedEndOfInput, start.line)?);
    }

    let kind = if let Some(operator) = OPERATOR_LOOKUP.get(token.as_str()) {
        TokenKind::Operator(*operator)
    } else if let Some(keyword) = KEYWORD_LOOKUP.get(token.as_str()) {
        TokenKind::Keyword(*keyword)
    } else {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidOperatorOrSymbol { symbol: token },
            stream.line_number()
        ));
    };

    let end = end_of(stream, &start);
    Ok(MK_TOKEN!(kind, TokenValue::Text(token), start, end))
}

/// Scans a comment opened by `marker`. End of input closes any comment.
pub fn comment(stream: &mut CharStream, marker: CommentMarker) -> Result<Token, Error> {
    let start = begin(stream)?;
    let mut text = String::from(start.first);

    for _ in 1..marker.start().chars().count() {
        text.push(advance_or(stream, ErrorImpl::UnexpectedEndOfInput, start.line)?);
    }

    let body = text.len();
    while !text[body..].ends_with(marker.end()) {
        match stream.advance_next() {
            Ok(c) => text.push(c),
            Err(_) => break,
        }
    }

    let end = end_of(stream, &start);
    Ok(MK_TOKEN!(marker.kind(), TokenValue::Text(text), start, end))
}

pub fn plain_string(stream: &mut CharStream) -> Result<Token, Error> {
    let start = begin(stream)?;
    let unterminated = ErrorImpl::UnterminatedStringLiteral;
    let mut text = String::new();

    loop {
        match advance_or(stream, unterminated.clone(), start.line)? {
            '\\' => {
                text.push('\\');
                text.push(advance_or(stream, unterminated.clone(), start.line)?);
            }
            c if c == start.first => break,
            c => text.push(c),
        }
    }

    let end = end_of(stream, &start);
    Ok(MK_TOKEN!(TokenKind::PlainString, TokenValue::Text(text), start, end))
}

pub fn template_string(stream: &mut CharStream) -> Result<Token, Error> {
    let start = begin(stream)?;
    let unterminated = ErrorImpl::UnterminatedTemplateStringLiteral;
    let mut template = TemplateLiteral::default();

    loop {
        match advance_or(stream, unterminated.clone(), start.line)? {
            '\\' => {
                template.text.push('\\');
                template
                    .text
                    .push(advance_or(stream, unterminated.clone(), start.line)?);
            }
            c if c == start.first => break,
            '$' if stream.window(2) == Some(TEMPLATE_ARGUMENT_START) => {
                let offset = end_of(stream, &start) - start.index;
                advance_or(stream, unterminated.clone(), start.line)?;

                let tokens = interpolation(stream, start.line)?;
                template.interpolations.insert(offset, tokens);
            }
            '$' => template.text.push_str("\\$"),
            c => template.text.push(c),
        }
    }

    let end = end_of(stream, &start);
    Ok(MK_TOKEN!(
        TokenKind::TemplateString,
        TokenValue::Template(template),
        start,
        end
    ))
}

/// Lexes the body of a `${ ... }` on the enclosing template's stream, up to
/// and including its balanced closing brace.
fn interpolation(stream: &mut CharStream, line: usize) -> Result<Vec<Token>, Error> {
    debug!(line = stream.line_number(), "entering template interpolation");

    let mut lexer = Lexer::interpolation(stream);
    let tokens = lexer.by_ref().collect::<Result<Vec<_>, _>>()?;

    if !lexer.is_closed() {
        return Err(MK_ERROR!(ErrorImpl::UnterminatedTemplateStringLiteral, line));
    }

    debug!(tokens = tokens.len(), "leaving template interpolation");
    Ok(tokens)
}

/// Scans a regex literal. The stored pattern keeps every backslash sequence
/// as written and escapes any bare `/`, so it can be emitted between slashes.
pub fn regex(stream: &mut CharStream, delimiter: TextDelimiter) -> Result<Token, Error> {
    let start = begin(stream)?;
    let unterminated = ErrorImpl::UnterminatedRegexLiteral;
    let closing = delimiter.closing();
    let mut literal = RegexLiteral::default();

    for _ in 1..delimiter.spelling().chars().count() {
        advance_or(stream, unterminated.clone(), start.line)?;
    }

    loop {
        match advance_or(stream, unterminated.clone(), start.line)? {
            '\\' => {
                literal.pattern.push('\\');
                literal
                    .pattern
                    .push(advance_or(stream, unterminated.clone(), start.line)?);
            }
            c if c == closing => break,
            '/' => literal.pattern.push_str("\\/"),
            c => literal.pattern.push(c),
        }
    }

    while let Ok(next) = stream.peek(1) {
        if !is_reg_char(next) {
            break;
        }

        advance_or(stream, ErrorImpl::UnexpectedEndOfInput, start.line)?;
        let repeated = literal.flags.contains(next);
        literal.flags.push(next);

        if repeated || !REGEX_FLAGS.contains(&next) {
            return Err(MK_ERROR!(
                ErrorImpl::InvalidRegexFlags {
                    flags: literal.flags
                },
                stream.line_number()
            ));
        }
    }

    let end = end_of(stream, &start);
    Ok(MK_TOKEN!(
        TokenKind::RegexString,
        TokenValue::Regex(literal),
        start,
        end
    ))
}
