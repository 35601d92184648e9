//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, identifiers and word operators
//! - Numeric literals in every notation
//! - Operators, punctuation keywords and code delimiters
//! - Plain strings, template strings and regex literals
//! - Comments
//! - Positions, lines and error cases

use super::{
    lexer::{lex, lex_stream, tokenize},
    stream::CharStream,
    symbols::{CodeDelimiter, Keyword, Operator},
    tokens::{Token, TokenKind},
};
use crate::errors::errors::ErrorImpl;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.text()).collect()
}

fn error_kind(source: &str) -> ErrorImpl {
    tokenize(source).unwrap_err().get_kind().clone()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let const fn if elif else while return").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Keyword(Keyword::Const),
            TokenKind::Keyword(Keyword::Function),
            TokenKind::Keyword(Keyword::If),
            TokenKind::Keyword(Keyword::Elif),
            TokenKind::Keyword(Keyword::Else),
            TokenKind::Keyword(Keyword::While),
            TokenKind::Keyword(Keyword::Return),
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(
        texts(&tokens),
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase"]
    );
}

#[test]
fn test_word_operators_take_priority_over_keywords() {
    let tokens = tokenize("a and b or not c in d").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Operator::And),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Or),
            TokenKind::Operator(Operator::Not),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::In),
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_placeholder_and_debug_keywords() {
    let tokens = tokenize("_ _x _debug_").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Placeholder));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "_x");
    assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::Debug));
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5 1e10 2.5E-3 0x1F 0o17 0b101 123n 0n .5 7.";
    let tokens = tokenize(source).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Number));
    assert_eq!(
        texts(&tokens),
        vec!["42", "3.14", "0", "100.5", "1e10", "2.5E-3", "0x1F", "0o17", "0b101", "123n", "0n", ".5", "7."]
    );
}

#[test]
fn test_range_is_not_a_decimal_point() {
    let tokens = tokenize("1..5").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Number,
            TokenKind::Operator(Operator::Range),
            TokenKind::Number,
        ]
    );
    assert_eq!(texts(&tokens), vec!["1", "..", "5"]);
}

#[test]
fn test_member_access_is_not_a_float() {
    let tokens = tokenize("a.b").unwrap();

    assert_eq!(texts(&tokens), vec!["a", ".", "b"]);
    assert_eq!(tokens[1].kind, TokenKind::Operator(Operator::Dot));
}

#[test]
fn test_invalid_numbers() {
    for source in ["01", "0123", "01234.0", "5abc", "0x24.3", "0o5.", "0b1.", "12e2n", "123.n", ".2n", "0583n"] {
        match error_kind(source) {
            ErrorImpl::InvalidNumberLiteral { literal } => assert_eq!(literal, source),
            other => panic!("{source:?} gave {other:?}"),
        }
    }
}

#[test]
fn test_invalid_number_reports_line() {
    let error = tokenize("x\ny\n09").unwrap_err();

    assert_eq!(error.get_line(), 3);
    assert_eq!(error.get_error_name(), "InvalidNumberLiteral");
}

#[test]
fn test_tokenize_operators() {
    let source = "a + b - c * d / e % f ** g == h != i <= j >= k >>> l ?. m ?? n => o";
    let tokens = tokenize(source).unwrap();
    let operators: Vec<TokenKind> = kinds(&tokens)
        .into_iter()
        .filter(|kind| matches!(kind, TokenKind::Operator(_)))
        .collect();

    assert_eq!(
        operators,
        vec![
            TokenKind::Operator(Operator::Plus),
            TokenKind::Operator(Operator::Minus),
            TokenKind::Operator(Operator::Mult),
            TokenKind::Operator(Operator::Divide),
            TokenKind::Operator(Operator::Mod),
            TokenKind::Operator(Operator::Exponent),
            TokenKind::Operator(Operator::Eq),
            TokenKind::Operator(Operator::NotEq),
            TokenKind::Operator(Operator::LtEq),
            TokenKind::Operator(Operator::GtEq),
            TokenKind::Operator(Operator::BinZeroRight),
            TokenKind::Operator(Operator::OptionDot),
            TokenKind::Operator(Operator::Coalesce),
            TokenKind::Operator(Operator::Arrow),
        ]
    );
}

#[test]
fn test_tokenize_assignment_operators() {
    let tokens = tokenize("a = b += c **= d >>>= e ??= f").unwrap();

    let assignments: Vec<&Token> = tokens
        .iter()
        .filter(|token| matches!(token.kind, TokenKind::Operator(op) if op.is_assignment()))
        .collect();

    assert_eq!(assignments.len(), 5);
    assert_eq!(texts(&tokens)[7], ">>>=");
}

#[test]
fn test_postfix_operator() {
    let tokens = tokenize("i++").unwrap();

    match tokens[1].kind {
        TokenKind::Operator(op) => {
            assert_eq!(op, Operator::Increment);
            assert!(op.is_postfix());
        }
        other => panic!("expected operator, got {other:?}"),
    }
}

#[test]
fn test_bang_is_a_punctuation_keyword() {
    let tokens = tokenize("!(x != y)").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Keyword(Keyword::Bang),
            TokenKind::CodeDelimiter(CodeDelimiter::OpenParen),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::NotEq),
            TokenKind::Identifier,
            TokenKind::CodeDelimiter(CodeDelimiter::CloseParen),
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize("( ) [ ] { } , ; :").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::CodeDelimiter(CodeDelimiter::OpenParen),
            TokenKind::CodeDelimiter(CodeDelimiter::CloseParen),
            TokenKind::CodeDelimiter(CodeDelimiter::OpenBracket),
            TokenKind::CodeDelimiter(CodeDelimiter::CloseBracket),
            TokenKind::CodeDelimiter(CodeDelimiter::OpenCurly),
            TokenKind::CodeDelimiter(CodeDelimiter::CloseCurly),
            TokenKind::CodeDelimiter(CodeDelimiter::Comma),
            TokenKind::CodeDelimiter(CodeDelimiter::Semicolon),
            TokenKind::CodeDelimiter(CodeDelimiter::Colon),
        ]
    );
}

#[test]
fn test_delimiters_never_combine() {
    let tokens = tokenize("f(g(x));").unwrap();

    assert_eq!(texts(&tokens), vec!["f", "(", "g", "(", "x", ")", ")", ";"]);
}

#[test]
fn test_unknown_operator_run() {
    assert_eq!(
        error_kind("a <> b"),
        ErrorImpl::InvalidOperatorOrSymbol {
            symbol: "<>".to_string()
        }
    );
    assert_eq!(
        error_kind("a @ b"),
        ErrorImpl::InvalidOperatorOrSymbol {
            symbol: "@".to_string()
        }
    );
}

#[test]
fn test_invalid_character() {
    assert_eq!(error_kind("let é"), ErrorImpl::InvalidCharacter { character: 'é' });
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'world' "esc\"aped" """#).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::PlainString));
    assert_eq!(texts(&tokens), vec!["hello", "world", "esc\\\"aped", ""]);
    assert_eq!(tokens[2].unescaped(), Some("esc\"aped".to_string()));
}

#[test]
fn test_string_escapes_are_kept_raw() {
    let tokens = tokenize(r#""a\nb\q""#).unwrap();

    assert_eq!(tokens[0].text(), "a\\nb\\q");
    assert_eq!(tokens[0].unescaped(), None);
}

#[test]
fn test_other_quote_inside_string() {
    let tokens = tokenize(r#""it's" 'say "hi"'"#).unwrap();

    assert_eq!(texts(&tokens), vec!["it's", "say \"hi\""]);
}

#[test]
fn test_unterminated_string() {
    let output = lex("\"a");

    assert!(output.tokens.is_empty());
    let error = output.error.unwrap();
    assert_eq!(*error.get_kind(), ErrorImpl::UnterminatedStringLiteral);
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_unterminated_string_reports_opening_line() {
    let output = lex("x\n\"abc\ndef");

    assert_eq!(texts(&output.tokens), vec!["x"]);
    assert_eq!(output.error.unwrap().get_line(), 2);
}

#[test]
fn test_template_interpolation() {
    let source = "`a${1+2}b`";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::TemplateString);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 9));

    let template = tokens[0].template().unwrap();
    assert_eq!(template.text, "ab");
    assert_eq!(template.interpolations.len(), 1);

    let inner = &template.interpolations[&2];
    assert_eq!(
        kinds(inner),
        vec![
            TokenKind::Number,
            TokenKind::Operator(Operator::Plus),
            TokenKind::Number,
        ]
    );
    assert_eq!(texts(inner), vec!["1", "+", "2"]);
    assert_eq!(inner[0].start, 4);
    assert_eq!(inner[2].end, 6);
    assert_eq!(&source[2..3], "$");
}

#[test]
fn test_multiple_interpolations() {
    let tokens = tokenize("`${a}${b}`").unwrap();
    let template = tokens[0].template().unwrap();

    assert_eq!(template.text, "");
    assert_eq!(template.interpolations.keys().copied().collect::<Vec<_>>(), vec![1, 5]);
    assert_eq!(texts(&template.interpolations[&1]), vec!["a"]);
    assert_eq!(texts(&template.interpolations[&5]), vec!["b"]);
}

#[test]
fn test_interpolation_with_nested_braces() {
    let tokens = tokenize("`${ {a: 1} }`").unwrap();
    let template = tokens[0].template().unwrap();

    assert_eq!(texts(&template.interpolations[&1]), vec!["{", "a", ":", "1", "}"]);
}

#[test]
fn test_template_inside_interpolation() {
    let tokens = tokenize("`a${`b${c}`}d`").unwrap();
    let outer = tokens[0].template().unwrap();

    assert_eq!(outer.text, "ad");
    let inner = &outer.interpolations[&2];
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].kind, TokenKind::TemplateString);

    let inner_template = inner[0].template().unwrap();
    assert_eq!(inner_template.text, "b");
    assert_eq!(texts(&inner_template.interpolations[&2]), vec!["c"]);
}

#[test]
fn test_template_lone_dollar_is_escaped() {
    let tokens = tokenize("`cost $5`").unwrap();
    let template = tokens[0].template().unwrap();

    assert_eq!(template.text, "cost \\$5");
    assert!(template.interpolations.is_empty());
}

#[test]
fn test_template_spans_lines() {
    let tokens = tokenize("`a\nb` x").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[0].text(), "a\nb");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_unterminated_template() {
    assert_eq!(error_kind("`abc"), ErrorImpl::UnterminatedTemplateStringLiteral);
    assert_eq!(error_kind("`${a"), ErrorImpl::UnterminatedTemplateStringLiteral);
    assert_eq!(error_kind("`${a}"), ErrorImpl::UnterminatedTemplateStringLiteral);
}

#[test]
fn test_error_inside_interpolation_propagates() {
    assert_eq!(
        error_kind("`${01}`"),
        ErrorImpl::InvalidNumberLiteral {
            literal: "01".to_string()
        }
    );
}

#[test]
fn test_regex_literal_with_flags() {
    let tokens = tokenize("x = /ab+c/gi").unwrap();

    assert_eq!(tokens[2].kind, TokenKind::RegexString);
    let regex = tokens[2].regex().unwrap();
    assert_eq!(regex.pattern, "ab+c");
    assert_eq!(regex.flags, "gi");
    assert_eq!((tokens[2].start, tokens[2].end), (4, 11));
}

#[test]
fn test_repeated_regex_flag() {
    assert_eq!(
        error_kind("x = /a/gg"),
        ErrorImpl::InvalidRegexFlags {
            flags: "gg".to_string()
        }
    );
}

#[test]
fn test_unknown_regex_flag() {
    assert_eq!(
        error_kind("(/a/x)"),
        ErrorImpl::InvalidRegexFlags {
            flags: "x".to_string()
        }
    );
}

#[test]
fn test_slash_after_operand_is_division() {
    let tokens = tokenize("a / b; (c) / 2").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Operator(Operator::Divide));
    assert_eq!(tokens[7].kind, TokenKind::Operator(Operator::Divide));
}

#[test]
fn test_slash_after_value_keyword_is_division() {
    let tokens = tokenize("return true / 2").unwrap();

    assert_eq!(tokens[2].kind, TokenKind::Operator(Operator::Divide));
}

#[test]
fn test_slash_regex_keeps_escaped_delimiter() {
    let tokens = tokenize(r"(/a\/b/)").unwrap();

    assert_eq!(tokens[1].regex().unwrap().pattern, r"a\/b");
}

#[test]
fn test_backtick_regex_escapes_slash() {
    let tokens = tokenize(r"r`a/b\`c`g").unwrap();

    assert_eq!(tokens.len(), 1);
    let regex = tokens[0].regex().unwrap();
    assert_eq!(regex.pattern, r"a\/b\`c");
    assert_eq!(regex.flags, "g");
}

#[test]
fn test_r_identifier_is_not_a_regex() {
    let tokens = tokenize("r + bar").unwrap();

    assert_eq!(texts(&tokens), vec!["r", "+", "bar"]);
}

#[test]
fn test_unterminated_regex() {
    assert_eq!(error_kind("x = /abc"), ErrorImpl::UnterminatedRegexLiteral);
    assert_eq!(error_kind("r`abc"), ErrorImpl::UnterminatedRegexLiteral);
}

#[test]
fn test_line_comment() {
    let tokens = tokenize("// hi\n5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LineComment);
    assert_eq!(tokens[0].text(), "// hi\n");
    assert_eq!((tokens[0].start, tokens[0].end), (0, 5));
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].text(), "5");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_comment_markers() {
    let tokens = tokenize("# note\n/// doc\nx").unwrap();

    assert_eq!(texts(&tokens), vec!["# note\n", "/// doc\n", "x"]);
    assert_eq!(tokens[1].kind, TokenKind::LineComment);
    assert_eq!(tokens[2].line, 3);
}

#[test]
fn test_block_comment() {
    let tokens = tokenize("/* a\nb */ x /**/ /*/ y */").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::BlockComment,
            TokenKind::Identifier,
            TokenKind::BlockComment,
            TokenKind::BlockComment,
        ]
    );
    assert_eq!(texts(&tokens), vec!["/* a\nb */", "x", "/**/", "/*/ y */"]);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_open_comments_end_at_input_end() {
    let tokens = tokenize("x // trailing").unwrap();
    assert_eq!(tokens[1].text(), "// trailing");

    let tokens = tokenize("/* never closed").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::BlockComment);
    assert_eq!(tokens[0].text(), "/* never closed");
}

#[test]
fn test_comment_keeps_division_context() {
    let tokens = tokenize("a /* c */ / b").unwrap();

    assert_eq!(tokens[2].kind, TokenKind::Operator(Operator::Divide));
}

#[test]
fn test_token_positions() {
    let source = "let x\n  = 42";
    let tokens = tokenize(source).unwrap();

    assert_eq!((tokens[0].start, tokens[0].end, tokens[0].line), (0, 2, 1));
    assert_eq!((tokens[2].start, tokens[2].end, tokens[2].line), (8, 8, 2));
    assert_eq!((tokens[3].start, tokens[3].end, tokens[3].line), (10, 11, 2));
    assert_eq!(tokens[3].source_text(source), Some("42"));
}

#[test]
fn test_multibyte_string_span() {
    let source = "\"é\"";
    let tokens = tokenize(source).unwrap();

    assert_eq!((tokens[0].start, tokens[0].end), (0, 3));
    assert_eq!(tokens[0].source_text(source), Some(source));
}

#[test]
fn test_empty_and_blank_sources() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \n\t ").unwrap().is_empty());
}

#[test]
fn test_lexer_is_lazy() {
    let mut stream = CharStream::new("a b c");

    {
        let mut lexer = lex_stream(&mut stream);
        assert_eq!(lexer.next().unwrap().unwrap().text(), "a");
        assert_eq!(lexer.next().unwrap().unwrap().text(), "b");
    }

    assert_eq!(stream.current_index(), Some(2));
}

#[test]
fn test_lexer_stops_after_error() {
    let mut stream = CharStream::new("@ a");
    let mut lexer = lex_stream(&mut stream);

    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}

#[test]
fn test_partial_output_keeps_tokens_before_failure() {
    let output = lex("a b\nc @ d");

    assert!(!output.is_ok());
    assert_eq!(texts(&output.tokens), vec!["a", "b", "c"]);
    assert_eq!(output.error.as_ref().unwrap().get_line(), 2);

    let tokens = output.into_tokens();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[3].kind, TokenKind::Error);
    assert_eq!(tokens[3].line, 2);
    assert_eq!(tokens[3].start, 6);
}

#[test]
fn test_lines_never_decrease() {
    let source = "let a = `x${\n1\n}`\nb /* c\n */ d\n";
    let tokens = tokenize(source).unwrap();

    assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));
    assert_eq!(tokens.last().unwrap().line, 5);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("`a${b}`").unwrap();

    assert_eq!(
        tokens[0].to_string(),
        "TemplateString \"a\" (line 1, 0..=6)\n  ${} at 2\n    Identifier \"b\" (line 1, 4..=4)"
    );

    let tokens = tokenize("(/x/g)").unwrap();
    assert_eq!(tokens[1].to_string(), "RegexString /x/g (line 1, 1..=4)");
}
