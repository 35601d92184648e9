//! The fixed symbol vocabulary: operators, keywords, delimiters, comment
//! markers and the character classes the driver dispatches on.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use super::tokens::TokenKind;

pub const TEMPLATE_ARGUMENT_START: &str = "${";
pub const TEMPLATE_ARGUMENT_END: char = '}';
pub const REGEX_FLAGS: &[char] = &['d', 'g', 'i', 'm', 's', 'u', 'v', 'y'];
pub const OPERATOR_CHARS: &str = "+-*/%=!<>&|^~?.@$\\";

/// The positions an operator may take. Never empty.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Fixity(u8);

impl Fixity {
    pub const PREFIX: Fixity = Fixity(0b0001);
    pub const POSTFIX: Fixity = Fixity(0b0010);
    pub const BINARY: Fixity = Fixity(0b0100);
    pub const ASSIGNMENT: Fixity = Fixity(0b1000);

    pub const fn union(self, other: Fixity) -> Fixity {
        Fixity(self.0 | other.0)
    }

    pub const fn contains(self, other: Fixity) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for Fixity {
    fn default() -> Self {
        Fixity::BINARY
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Divide,
    Mult,
    Mod,
    Exponent,
    Increment,
    Decrement,

    Dot,
    OptionDot,

    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,

    And,
    Or,
    Not,

    BinLeft,
    BinRight,
    BinZeroRight,
    BinOr,
    BinXor,
    BinAnd,
    BinNot,

    Range,
    Coalesce,
    In,
    Arrow,
    Conditional,

    Assign,
    PlusAssign,
    MinusAssign,
    MultAssign,
    DivideAssign,
    ExponentAssign,
    ModAssign,
    BinLeftAssign,
    BinRightAssign,
    BinZeroRightAssign,
    BinOrAssign,
    BinXorAssign,
    BinAndAssign,
    CoalesceAssign,
}

impl Operator {
    pub const ALL: [Operator; 45] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Divide,
        Operator::Mult,
        Operator::Mod,
        Operator::Exponent,
        Operator::Increment,
        Operator::Decrement,
        Operator::Dot,
        Operator::OptionDot,
        Operator::Eq,
        Operator::NotEq,
        Operator::Gt,
        Operator::Lt,
        Operator::GtEq,
        Operator::LtEq,
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::BinLeft,
        Operator::BinRight,
        Operator::BinZeroRight,
        Operator::BinOr,
        Operator::BinXor,
        Operator::BinAnd,
        Operator::BinNot,
        Operator::Range,
        Operator::Coalesce,
        Operator::In,
        Operator::Arrow,
        Operator::Conditional,
        Operator::Assign,
        Operator::PlusAssign,
        Operator::MinusAssign,
        Operator::MultAssign,
        Operator::DivideAssign,
        Operator::ExponentAssign,
        Operator::ModAssign,
        Operator::BinLeftAssign,
        Operator::BinRightAssign,
        Operator::BinZeroRightAssign,
        Operator::BinOrAssign,
        Operator::BinXorAssign,
        Operator::BinAndAssign,
        Operator::CoalesceAssign,
    ];

    pub fn spelling(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Divide => "/",
            Operator::Mult => "*",
            Operator::Mod => "%",
            Operator::Exponent => "**",
            Operator::Increment => "++",
            Operator::Decrement => "--",
            Operator::Dot => ".",
            Operator::OptionDot => "?.",
            Operator::Eq => "==",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::GtEq => ">=",
            Operator::LtEq => "<=",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::BinLeft => "<<",
            Operator::BinRight => ">>",
            Operator::BinZeroRight => ">>>",
            Operator::BinOr => "|",
            Operator::BinXor => "^",
            Operator::BinAnd => "&",
            Operator::BinNot => "~",
            Operator::Range => "..",
            Operator::Coalesce => "??",
            Operator::In => "in",
            Operator::Arrow => "=>",
            Operator::Conditional => "?",
            Operator::Assign => "=",
            Operator::PlusAssign => "+=",
            Operator::MinusAssign => "-=",
            Operator::MultAssign => "*=",
            Operator::DivideAssign => "/=",
            Operator::ExponentAssign => "**=",
            Operator::ModAssign => "%=",
            Operator::BinLeftAssign => "<<=",
            Operator::BinRightAssign => ">>=",
            Operator::BinZeroRightAssign => ">>>=",
            Operator::BinOrAssign => "|=",
            Operator::BinXorAssign => "^=",
            Operator::BinAndAssign => "&=",
            Operator::CoalesceAssign => "??=",
        }
    }

    pub fn fixity(&self) -> Fixity {
        match self {
            Operator::Plus | Operator::Minus => Fixity::PREFIX.union(Fixity::BINARY),
            Operator::Increment | Operator::Decrement => Fixity::PREFIX.union(Fixity::POSTFIX),
            Operator::Not | Operator::BinNot => Fixity::PREFIX,
            Operator::Assign
            | Operator::PlusAssign
            | Operator::MinusAssign
            | Operator::MultAssign
            | Operator::DivideAssign
            | Operator::ExponentAssign
            | Operator::ModAssign
            | Operator::BinLeftAssign
            | Operator::BinRightAssign
            | Operator::BinZeroRightAssign
            | Operator::BinOrAssign
            | Operator::BinXorAssign
            | Operator::BinAndAssign
            | Operator::CoalesceAssign => Fixity::ASSIGNMENT,
            _ => Fixity::default(),
        }
    }

    pub fn is_prefix(&self) -> bool {
        self.fixity().contains(Fixity::PREFIX)
    }

    pub fn is_postfix(&self) -> bool {
        self.fixity().contains(Fixity::POSTFIX)
    }

    pub fn is_binary(&self) -> bool {
        self.fixity().contains(Fixity::BINARY)
    }

    pub fn is_assignment(&self) -> bool {
        self.fixity().contains(Fixity::ASSIGNMENT)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    // Declarations
    Function,
    Let,
    Const,
    Global,

    // Statements
    Delete,
    Return,
    Break,
    Yield,
    Continue,

    // Control structures
    Try,
    Except,
    Finally,
    Raise,
    If,
    Elif,
    Else,
    For,
    While,
    Loop,
    Switch,
    Case,

    // Special constants
    This,
    Super,
    True,
    False,
    Null,
    Undefined,
    Infinity,

    Debug,
    Placeholder,
    Bang,

    // Planned
    Arguments,
    Async,
    Await,
    Enum,
    Import,
    Export,

    // Reserved, not in use
    Class,
    Goto,
    Package,
    DeleteReserved,
    Implements,
    With,
    Do,
    FunctionReserved,
    Interface,
    New,
    Static,
    Void,
}

impl Keyword {
    pub const ALL: [Keyword; 49] = [
        Keyword::Function,
        Keyword::Let,
        Keyword::Const,
        Keyword::Global,
        Keyword::Delete,
        Keyword::Return,
        Keyword::Break,
        Keyword::Yield,
        Keyword::Continue,
        Keyword::Try,
        Keyword::Except,
        Keyword::Finally,
        Keyword::Raise,
        Keyword::If,
        Keyword::Elif,
        Keyword::Else,
        Keyword::For,
        Keyword::While,
        Keyword::Loop,
        Keyword::Switch,
        Keyword::Case,
        Keyword::This,
        Keyword::Super,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
        Keyword::Undefined,
        Keyword::Infinity,
        Keyword::Debug,
        Keyword::Placeholder,
        Keyword::Bang,
        Keyword::Arguments,
        Keyword::Async,
        Keyword::Await,
        Keyword::Enum,
        Keyword::Import,
        Keyword::Export,
        Keyword::Class,
        Keyword::Goto,
        Keyword::Package,
        Keyword::DeleteReserved,
        Keyword::Implements,
        Keyword::With,
        Keyword::Do,
        Keyword::FunctionReserved,
        Keyword::Interface,
        Keyword::New,
        Keyword::Static,
        Keyword::Void,
    ];

    pub fn spelling(&self) -> &'static str {
        match self {
            Keyword::Function => "fn",
            Keyword::Let => "let",
            Keyword::Const => "const",
            Keyword::Global => "GLOBAL",
            Keyword::Delete => "del",
            Keyword::Return => "return",
            Keyword::Break => "break",
            Keyword::Yield => "yield",
            Keyword::Continue => "continue",
            Keyword::Try => "try",
            Keyword::Except => "except",
            Keyword::Finally => "finally",
            Keyword::Raise => "raise",
            Keyword::If => "if",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Loop => "loop",
            Keyword::Switch => "switch",
            Keyword::Case => "case",
            Keyword::This => "this",
            Keyword::Super => "super",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::Undefined => "undefined",
            Keyword::Infinity => "infinity",
            Keyword::Debug => "_debug_",
            Keyword::Placeholder => "_",
            Keyword::Bang => "!",
            Keyword::Arguments => "arguments",
            Keyword::Async => "async",
            Keyword::Await => "await",
            Keyword::Enum => "enum",
            Keyword::Import => "import",
            Keyword::Export => "export",
            Keyword::Class => "class",
            Keyword::Goto => "goto",
            Keyword::Package => "package",
            Keyword::DeleteReserved => "delete",
            Keyword::Implements => "implements",
            Keyword::With => "with",
            Keyword::Do => "do",
            Keyword::FunctionReserved => "function",
            Keyword::Interface => "interface",
            Keyword::New => "new",
            Keyword::Static => "static",
            Keyword::Void => "void",
        }
    }

    /// Keywords that stand for a value and so end an operand.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Keyword::This
                | Keyword::Super
                | Keyword::True
                | Keyword::False
                | Keyword::Null
                | Keyword::Undefined
                | Keyword::Infinity
                | Keyword::Arguments
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CodeDelimiter {
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Comma,
    Semicolon,
    Colon,
}

impl CodeDelimiter {
    pub const ALL: [CodeDelimiter; 9] = [
        CodeDelimiter::OpenParen,
        CodeDelimiter::CloseParen,
        CodeDelimiter::OpenBracket,
        CodeDelimiter::CloseBracket,
        CodeDelimiter::OpenCurly,
        CodeDelimiter::CloseCurly,
        CodeDelimiter::Comma,
        CodeDelimiter::Semicolon,
        CodeDelimiter::Colon,
    ];

    pub fn spelling(&self) -> char {
        match self {
            CodeDelimiter::OpenParen => '(',
            CodeDelimiter::CloseParen => ')',
            CodeDelimiter::OpenBracket => '[',
            CodeDelimiter::CloseBracket => ']',
            CodeDelimiter::OpenCurly => '{',
            CodeDelimiter::CloseCurly => '}',
            CodeDelimiter::Comma => ',',
            CodeDelimiter::Semicolon => ';',
            CodeDelimiter::Colon => ':',
        }
    }

    /// Delimiters after which an operand is expected.
    pub fn opens_operand(&self) -> bool {
        !matches!(
            self,
            CodeDelimiter::CloseParen | CodeDelimiter::CloseBracket | CodeDelimiter::CloseCurly
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TextDelimiter {
    DoubleQuote,
    SingleQuote,
    Backtick,
    RegexBacktick,
    RegexSlash,
}

impl TextDelimiter {
    pub fn spelling(&self) -> &'static str {
        match self {
            TextDelimiter::DoubleQuote => "\"",
            TextDelimiter::SingleQuote => "'",
            TextDelimiter::Backtick => "`",
            TextDelimiter::RegexBacktick => "r`",
            TextDelimiter::RegexSlash => "/",
        }
    }

    /// The character that closes the literal.
    pub fn closing(&self) -> char {
        match self {
            TextDelimiter::DoubleQuote => '"',
            TextDelimiter::SingleQuote => '\'',
            TextDelimiter::Backtick | TextDelimiter::RegexBacktick => '`',
            TextDelimiter::RegexSlash => '/',
        }
    }

    /// Quote delimiters recognised unconditionally by the driver. A bare `/`
    /// only opens a regex in operand position, so it is not listed here.
    pub fn from_quote(window: &str) -> Option<TextDelimiter> {
        match window {
            "\"" => Some(TextDelimiter::DoubleQuote),
            "'" => Some(TextDelimiter::SingleQuote),
            "`" => Some(TextDelimiter::Backtick),
            "r`" => Some(TextDelimiter::RegexBacktick),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CommentMarker {
    Hash,
    Line,
    DocLine,
    Block,
}

impl CommentMarker {
    pub const ALL: [CommentMarker; 4] = [
        CommentMarker::Hash,
        CommentMarker::Line,
        CommentMarker::DocLine,
        CommentMarker::Block,
    ];
    pub const MAX_WIDTH: usize = 3;

    pub fn start(&self) -> &'static str {
        match self {
            CommentMarker::Hash => "#",
            CommentMarker::Line => "//",
            CommentMarker::DocLine => "///",
            CommentMarker::Block => "/*",
        }
    }

    pub fn end(&self) -> &'static str {
        match self {
            CommentMarker::Block => "*/",
            _ => "\n",
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            CommentMarker::Block => TokenKind::BlockComment,
            _ => TokenKind::LineComment,
        }
    }
}

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, Operator> =
        Operator::ALL.iter().map(|op| (op.spelling(), *op)).collect();
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> =
        Keyword::ALL.iter().map(|kw| (kw.spelling(), *kw)).collect();
    pub static ref DELIMITER_LOOKUP: HashMap<char, CodeDelimiter> =
        CodeDelimiter::ALL.iter().map(|d| (d.spelling(), *d)).collect();
    pub static ref COMMENT_LOOKUP: HashMap<&'static str, CommentMarker> =
        CommentMarker::ALL.iter().map(|m| (m.start(), *m)).collect();
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

impl Display for CodeDelimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Letters, digits and underscore.
pub fn is_reg_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}
