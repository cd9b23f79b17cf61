use pretty_assertions::assert_eq;
use verdict_ir::{Span, Token, TokenKind};

use super::*;

fn tok(kind: TokenKind, column: u32) -> Token {
    Token::new(kind, Span::default(), 1, column, 1)
}

#[test]
fn test_parse_without_trailing_eof() {
    let tokens = vec![tok(TokenKind::Ident("a".into()), 1)];
    assert_eq!(parse(&tokens), Ok(Expr::Identifier("a".into())));
}

#[test]
fn test_function_name_without_paren_is_rejected() {
    let tokens = vec![
        tok(TokenKind::FunctionName("len".into()), 1),
        tok(TokenKind::Ident("x".into()), 5),
        tok(TokenKind::Eof, 6),
    ];
    let err = parse(&tokens).err().map(|e| (e.message, e.column));
    assert_eq!(
        err,
        Some((
            "expected '(' after function name 'len', found identifier 'x'".to_string(),
            5
        ))
    );
}

#[test]
fn test_max_depth_is_enforced() {
    let mut tokens: Vec<Token> = (0..10).map(|i| tok(TokenKind::LParen, i + 1)).collect();
    tokens.push(tok(TokenKind::Int(1), 11));
    tokens.extend((0..10).map(|i| tok(TokenKind::RParen, i + 12)));
    tokens.push(tok(TokenKind::Eof, 22));

    assert!(parse_with_config(&tokens, ParseConfig::default().with_max_depth(16)).is_ok());
    let err = parse_with_config(&tokens, ParseConfig::default().with_max_depth(5));
    assert!(matches!(err, Err(e) if e.message.contains("maximum depth of 5")));
}
