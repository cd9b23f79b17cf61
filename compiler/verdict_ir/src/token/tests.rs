use super::*;

#[test]
fn test_display_describes_payload() {
    assert_eq!(TokenKind::Ident("score".into()).to_string(), "identifier 'score'");
    assert_eq!(TokenKind::Int(85).to_string(), "integer 85");
    assert_eq!(TokenKind::Str("hi".into()).to_string(), "string \"hi\"");
    assert_eq!(TokenKind::GtEq.to_string(), "'>='");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}

#[test]
fn test_token_debug_shows_position() {
    let token = Token::new(TokenKind::Plus, Span::new(4, 5), 2, 3, 1);
    assert_eq!(format!("{token:?}"), "Plus @ 2:3");
}
