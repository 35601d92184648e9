//! Error types for the lexer.
//!
//! Every failure is a single record carrying an error kind and the 1-based
//! line where it was detected, along with a short suggestion for display.

pub mod errors;
