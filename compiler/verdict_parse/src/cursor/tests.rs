use super::*;

fn tokens(kinds: Vec<TokenKind>) -> Vec<Token> {
    kinds.into_iter().map(Token::dummy).collect()
}

#[test]
fn test_check_ignores_payload() {
    let toks = tokens(vec![TokenKind::Ident("x".into()), TokenKind::Eof]);
    let cursor = Cursor::new(&toks);
    assert!(cursor.check(&TokenKind::Ident(String::new())));
    assert!(!cursor.check(&TokenKind::Plus));
}

#[test]
fn test_advance_stops_at_end() {
    let toks = tokens(vec![TokenKind::Plus]);
    let mut cursor = Cursor::new(&toks);
    assert!(matches!(cursor.advance().kind, TokenKind::Plus));
    assert!(cursor.is_at_end());
    assert!(matches!(cursor.advance().kind, TokenKind::Eof));
    assert!(cursor.is_at_end());
}

#[test]
fn test_empty_stream_is_eof() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert!(matches!(cursor.peek_next_kind(), TokenKind::Eof));
}

#[test]
fn test_check_word_is_case_insensitive() {
    let toks = tokens(vec![TokenKind::Ident("AGO".into())]);
    let cursor = Cursor::new(&toks);
    assert!(cursor.check_word("ago"));
    assert!(!cursor.check_word("from"));
}

#[test]
fn test_peek_and_eat() {
    let toks = tokens(vec![TokenKind::Not, TokenKind::In, TokenKind::Eof]);
    let mut cursor = Cursor::new(&toks);
    assert!(matches!(cursor.peek_next_kind(), TokenKind::In));
    assert!(cursor.eat(&TokenKind::Not));
    assert!(!cursor.eat(&TokenKind::Not));
    assert!(cursor.eat(&TokenKind::In));
}
