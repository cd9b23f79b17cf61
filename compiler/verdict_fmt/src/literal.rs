//! Source spelling of literal values.

use std::fmt::Write;

use verdict_ir::Literal;

/// Source text for a literal, re-lexable to the same token.
pub(crate) fn literal_source(literal: &Literal) -> String {
    match literal {
        Literal::Int(n) => n.to_string(),
        Literal::Float(f) => {
            let text = f.to_string();
            if f.is_finite() && !text.contains('.') {
                format!("{text}.0")
            } else {
                text
            }
        }
        Literal::Str(s) => quote(s),
        Literal::Bool(b) => b.to_string(),
        Literal::Date(d) => format!("#{}#", d.format("%Y-%m-%d")),
        Literal::DateTime(dt) => format!("#{}#", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
    }
}

/// Double-quoted string with the lexer's escapes applied.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => {
                let _ = out.write_char(other);
            }
        }
    }
    out.push('"');
    out
}

/// True if `key` can be written as a bare object key.
pub(crate) fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_reserved(key)
}

fn is_reserved(word: &str) -> bool {
    ["and", "or", "not", "in", "contains", "true", "false"]
        .iter()
        .any(|kw| kw.eq_ignore_ascii_case(word))
}
