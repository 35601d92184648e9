use std::{collections::BTreeMap, fmt::Display};

use super::{
    formats::Formats,
    symbols::{CodeDelimiter, Keyword, Operator},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Operator(Operator),
    Keyword(Keyword),
    CodeDelimiter(CodeDelimiter),
    Identifier,

    Number,
    PlainString,
    TemplateString,
    RegexString,

    LineComment,
    BlockComment,

    Error,
}

impl TokenKind {
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Whether an operand is expected after a token of this kind.
    pub fn expects_operand(&self) -> bool {
        match self {
            TokenKind::Operator(_) => true,
            TokenKind::Keyword(keyword) => !keyword.is_value(),
            TokenKind::CodeDelimiter(delimiter) => delimiter.opens_operand(),
            _ => false,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Operator(_) => write!(f, "Operator"),
            TokenKind::Keyword(_) => write!(f, "Keyword"),
            TokenKind::CodeDelimiter(_) => write!(f, "CodeDelimiter"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Text of a template literal with its interpolations lifted out.
///
/// `interpolations` maps the byte offset of each `${` from the opening
/// backtick to the tokens lexed from that interpolation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateLiteral {
    pub text: String,
    pub interpolations: BTreeMap<usize, Vec<Token>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegexLiteral {
    pub pattern: String,
    pub flags: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Template(TemplateLiteral),
    Regex(RegexLiteral),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn text(&self) -> &str {
        match &self.value {
            TokenValue::Text(text) => text,
            TokenValue::Template(template) => &template.text,
            TokenValue::Regex(regex) => &regex.pattern,
        }
    }

    pub fn template(&self) -> Option<&TemplateLiteral> {
        match &self.value {
            TokenValue::Template(template) => Some(template),
            _ => None,
        }
    }

    pub fn regex(&self) -> Option<&RegexLiteral> {
        match &self.value {
            TokenValue::Regex(regex) => Some(regex),
            _ => None,
        }
    }

    /// Decoded contents of a plain string token.
    pub fn unescaped(&self) -> Option<String> {
        match self.kind {
            TokenKind::PlainString => Formats::unescape(self.text()),
            _ => None,
        }
    }

    /// The span this token covers in the source it was lexed from.
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..=self.end)
    }

    fn fmt_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);

        match &self.value {
            TokenValue::Text(text) => write!(
                f,
                "{}{} {:?} (line {}, {}..={})",
                indent, self.kind, text, self.line, self.start, self.end
            ),
            TokenValue::Regex(regex) => write!(
                f,
                "{}{} /{}/{} (line {}, {}..={})",
                indent, self.kind, regex.pattern, regex.flags, self.line, self.start, self.end
            ),
            TokenValue::Template(template) => {
                write!(
                    f,
                    "{}{} {:?} (line {}, {}..={})",
                    indent, self.kind, template.text, self.line, self.start, self.end
                )?;

                for (offset, tokens) in &template.interpolations {
                    write!(f, "\n{}  ${{}} at {}", indent, offset)?;
                    for token in tokens {
                        writeln!(f)?;
                        token.fmt_indented(f, depth + 2)?;
                    }
                }

                Ok(())
            }
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}
