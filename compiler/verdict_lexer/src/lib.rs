//! Lexer for the Verdict expression language.
//!
//! Scanning is done by a logos-derived [`RawToken`] automaton; a cooking
//! pass then resolves literal payloads, tracks line/column positions, and
//! marks identifiers followed by `(` as function names.
//!
//! Lexing is all-or-nothing: [`tokenize`] returns either the complete token
//! list (always terminated by [`TokenKind::Eof`]) or the first error.

mod cook;
mod lex_error;
mod position;
mod raw_token;

use logos::Logos;
use verdict_ir::{Span, Token, TokenKind};

use cook::CookError;
use position::LineTracker;
use raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};

/// Tokenize an expression.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let raw = scan(source)?;
    let mut tracker = LineTracker::new(source);
    let mut tokens = Vec::with_capacity(raw.len() + 1);

    for (index, &(kind, ref range)) in raw.iter().enumerate() {
        let slice = &source[range.clone()];
        let (line, column) = tracker.advance_to(range.start);
        let next_is_paren = matches!(raw.get(index + 1), Some((RawToken::LParen, _)));

        let kind = convert_token(kind, slice, next_is_paren).map_err(|err| {
            let mut at = tracker.clone();
            let (line, column) = at.advance_to(range.start + err.offset);
            LexError::new(err.kind, Span::from_range(range.clone()), line, column)
        })?;
        let length = u32::try_from(slice.chars().count()).unwrap_or(u32::MAX);
        tokens.push(Token::new(kind, Span::from_range(range.clone()), line, column, length));
    }

    let (line, column) = tracker.advance_to(source.len());
    tokens.push(Token::new(TokenKind::Eof, Span::point(source.len()), line, column, 0));
    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Run the logos scanner to completion, stopping at the first unmatched input.
fn scan(source: &str) -> Result<Vec<(RawToken, std::ops::Range<usize>)>, LexError> {
    let mut logos = RawToken::lexer(source);
    let mut raw = Vec::new();

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        match token_result {
            Ok(kind) => raw.push((kind, range)),
            Err(()) => {
                let (line, column) = LineTracker::new(source).advance_to(range.start);
                let kind = classify_failure(&source[range.start..]);
                tracing::debug!(line, column, %kind, "lex error");
                return Err(LexError::new(kind, Span::from_range(range), line, column));
            }
        }
    }
    Ok(raw)
}

/// Name the failure from the character the unmatched input starts with.
fn classify_failure(rest: &str) -> LexErrorKind {
    match rest.chars().next() {
        Some(quote @ ('"' | '\'')) => LexErrorKind::UnterminatedString { quote },
        Some('#') => LexErrorKind::UnterminatedDate,
        Some(ch) => LexErrorKind::UnexpectedChar { ch },
        None => LexErrorKind::UnexpectedChar { ch: '\0' },
    }
}

/// Convert a raw token to a `TokenKind`.
fn convert_token(raw: RawToken, slice: &str, next_is_paren: bool) -> Result<TokenKind, CookError> {
    Ok(match raw {
        // Literals
        RawToken::Int => return cook::cook_int(slice),
        RawToken::Float => return cook::cook_float(slice),
        RawToken::DoubleQuoted | RawToken::SingleQuoted => return cook::cook_string(slice),
        RawToken::DateLiteral => return cook::cook_date(slice),
        RawToken::True => TokenKind::Bool(true),
        RawToken::False => TokenKind::Bool(false),
        RawToken::Ident if next_is_paren => TokenKind::FunctionName(slice.to_string()),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        // Keywords
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Not => TokenKind::Not,
        RawToken::In => TokenKind::In,
        RawToken::Contains => TokenKind::Contains,

        // Comparison
        RawToken::Eq | RawToken::EqEq => TokenKind::Eq,
        RawToken::StrictEq => TokenKind::StrictEq,
        RawToken::NotEq | RawToken::LtGt => TokenKind::NotEq,
        RawToken::StrictNotEq => TokenKind::StrictNotEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,

        // Arithmetic
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,

        // Symbolic logic
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Bang => TokenKind::Bang,

        // Punctuation
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
    })
}
