//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner output before literal
//! cooking (escapes, number parsing, date validation) and function-name
//! detection.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    // Keywords (case-insensitive)
    #[token("and", ignore(ascii_case))]
    And,
    #[token("or", ignore(ascii_case))]
    Or,
    #[token("not", ignore(ascii_case))]
    Not,
    #[token("in", ignore(ascii_case))]
    In,
    #[token("contains", ignore(ascii_case))]
    Contains,
    #[token("true", ignore(ascii_case))]
    True,
    #[token("false", ignore(ascii_case))]
    False,

    // Comparison
    #[token("===")]
    StrictEq,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!==")]
    StrictNotEq,
    #[token("!=")]
    NotEq,
    #[token("<>")]
    LtGt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,

    // Arithmetic
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // Symbolic logic
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,

    // Numbers; a `.` only starts a fraction when a digit follows
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Float,
    #[regex(r"[0-9]+")]
    Int,

    // Strings may span lines; escapes are resolved while cooking
    #[regex(r#""([^"\\]|\\[^\n])*""#)]
    DoubleQuoted,
    #[regex(r"'([^'\\]|\\[^\n])*'")]
    SingleQuoted,

    /// `#2024-01-15#`, `#2024-01-15T10:30:00#`
    #[regex(r"#[^#\n]*#")]
    DateLiteral,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
