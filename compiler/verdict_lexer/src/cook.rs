//! Literal cooking: turns raw slices into token payloads.
//!
//! Each function receives the exact slice logos matched and returns the
//! cooked value or the error kind plus the byte offset (relative to the
//! slice) the error should point at.

use chrono::NaiveDate;
use verdict_ir::{parse_datetime_text, TokenKind};

use crate::LexErrorKind;

/// Failure while cooking; `offset` is relative to the start of the slice.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CookError {
    pub kind: LexErrorKind,
    pub offset: usize,
}

impl CookError {
    fn at_start(kind: LexErrorKind) -> Self {
        CookError { kind, offset: 0 }
    }
}

pub(crate) fn cook_int(slice: &str) -> Result<TokenKind, CookError> {
    slice.parse::<i64>().map(TokenKind::Int).map_err(|_| {
        CookError::at_start(LexErrorKind::IntOverflow {
            text: slice.to_string(),
        })
    })
}

pub(crate) fn cook_float(slice: &str) -> Result<TokenKind, CookError> {
    match slice.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(TokenKind::Float(f)),
        _ => Err(CookError::at_start(LexErrorKind::InvalidFloat {
            text: slice.to_string(),
        })),
    }
}

/// Strip the quotes and resolve escapes.
pub(crate) fn cook_string(slice: &str) -> Result<TokenKind, CookError> {
    let content = slice.get(1..slice.len().saturating_sub(1)).unwrap_or_default();
    let mut out = String::with_capacity(content.len());
    let mut chars = content.char_indices();
    while let Some((index, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let escaped = chars.next().map(|(_, c)| c);
        match escaped {
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => {
                return Err(CookError {
                    kind: LexErrorKind::InvalidEscape { escape_char: other },
                    // +1 for the opening quote
                    offset: index + 1,
                })
            }
            None => {
                return Err(CookError::at_start(LexErrorKind::UnterminatedString {
                    quote: slice.chars().next().unwrap_or('"'),
                }))
            }
        }
    }
    Ok(TokenKind::Str(out))
}

/// Validate `#…#` content; a `T` or space separator makes it a datetime.
pub(crate) fn cook_date(slice: &str) -> Result<TokenKind, CookError> {
    let text = slice.trim_matches('#').trim();
    let is_datetime = text.contains(['T', ' ']);
    if is_datetime {
        parse_datetime_text(text)
            .map(TokenKind::DateTime)
            .ok_or_else(|| {
                CookError::at_start(LexErrorKind::InvalidDateTime {
                    text: text.to_string(),
                })
            })
    } else {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(TokenKind::Date)
            .map_err(|_| {
                CookError::at_start(LexErrorKind::InvalidDate {
                    text: text.to_string(),
                })
            })
    }
}
