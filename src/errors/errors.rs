use std::fmt::Display;

use thiserror::Error;

use crate::lexer::stream::EndOfInput;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (line {line})")]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::InvalidNumberLiteral { .. } => "InvalidNumberLiteral",
            ErrorImpl::InvalidOperatorOrSymbol { .. } => "InvalidOperatorOrSymbol",
            ErrorImpl::UnterminatedStringLiteral => "UnterminatedStringLiteral",
            ErrorImpl::UnterminatedTemplateStringLiteral => "UnterminatedTemplateStringLiteral",
            ErrorImpl::UnterminatedRegexLiteral => "UnterminatedRegexLiteral",
            ErrorImpl::InvalidRegexFlags { .. } => "InvalidRegexFlags",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` cannot start any token",
                character.escape_debug()
            )),
            ErrorImpl::InvalidNumberLiteral { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, numbers cannot have a leading zero or a second decimal point",
                literal
            )),
            ErrorImpl::InvalidOperatorOrSymbol { symbol } => ErrorTip::Suggestion(format!(
                "`{}` is not a known operator, did you forget a space?",
                symbol
            )),
            ErrorImpl::UnterminatedStringLiteral => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing quote"))
            }
            ErrorImpl::UnterminatedTemplateStringLiteral => ErrorTip::Suggestion(String::from(
                "Template string is missing its closing backtick or an interpolation is missing `}`",
            )),
            ErrorImpl::UnterminatedRegexLiteral => {
                ErrorTip::Suggestion(String::from("Regex literal is missing its closing delimiter"))
            }
            ErrorImpl::InvalidRegexFlags { flags } => ErrorTip::Suggestion(format!(
                "Invalid regex flags `{}`, each flag must be one of `dgimsuvy` and appear once",
                flags
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
        }
    }
}

impl From<EndOfInput> for ErrorImpl {
    fn from(_: EndOfInput) -> Self {
        ErrorImpl::UnexpectedEndOfInput
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid character {character:?}")]
    InvalidCharacter { character: char },
    #[error("invalid number literal {literal:?}")]
    InvalidNumberLiteral { literal: String },
    #[error("invalid operator/symbol {symbol:?}")]
    InvalidOperatorOrSymbol { symbol: String },
    #[error("unterminated string literal")]
    UnterminatedStringLiteral,
    #[error("unterminated template string literal")]
    UnterminatedTemplateStringLiteral,
    #[error("unterminated regex literal")]
    UnterminatedRegexLiteral,
    #[error("invalid regex flags {flags:?}")]
    InvalidRegexFlags { flags: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
