//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - A character stream with bounded lookahead and line tracking
//! - Recognition of keywords, identifiers, operators and delimiters
//! - Number literals in decimal, exponent, bigint, hex, octal and binary forms
//! - Plain strings, template strings with `${ ... }` interpolation, and regexes
//! - Line and block comments

pub mod formats;
pub mod lexer;
pub mod scanners;
pub mod stream;
pub mod symbols;
pub mod tokens;

#[cfg(test)]
mod tests;
