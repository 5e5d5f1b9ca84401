use super::*;

// === Symbol ===

#[test]
fn symbol_is_one_byte() {
    assert_eq!(std::mem::size_of::<Symbol>(), 1);
}

#[test]
fn fixed_lexeme_punctuation() {
    assert_eq!(Symbol::Colon.lexeme(), Some(":"));
    assert_eq!(Symbol::Dot.lexeme(), Some("."));
    assert_eq!(Symbol::Slash.lexeme(), Some("/"));
    assert_eq!(Symbol::At.lexeme(), Some("@"));
    assert_eq!(Symbol::Minus.lexeme(), Some("-"));
}

#[test]
fn variable_lexeme_returns_none() {
    assert_eq!(Symbol::Eof.lexeme(), None);
    assert_eq!(Symbol::Character.lexeme(), None);
    assert_eq!(Symbol::Digits.lexeme(), None);
    assert_eq!(Symbol::Hour12.lexeme(), None);
    assert_eq!(Symbol::TwoDigits.lexeme(), None);
    assert_eq!(Symbol::Fraction.lexeme(), None);
    assert_eq!(Symbol::Meridian.lexeme(), None);
    assert_eq!(Symbol::Space.lexeme(), None);
}

#[test]
fn name_returns_readable_description() {
    assert_eq!(Symbol::Eof.name(), "end of input");
    assert_eq!(Symbol::Hour12.name(), "12-hour hour");
    assert_eq!(Symbol::Colon.name(), "`:`");
    assert_eq!(Symbol::Meridian.to_string(), "meridian");
}

// === Token ===

#[test]
fn token_range_and_end() {
    let tok = Token::new(Symbol::Digits, 3, 4);
    assert_eq!(tok.end(), 7);
    assert_eq!(tok.range(), 3..7);
    assert_eq!(&"12:3000 pm"[tok.range()], "3000");
}

#[test]
fn end_saturates_near_offset_limit() {
    let tok = Token::new(Symbol::Digits, u32::MAX - 1, 4);
    assert_eq!(tok.end(), u32::MAX);
    assert_eq!(tok.range(), (u32::MAX - 1) as usize..u32::MAX as usize);
}

#[test]
fn eof_token() {
    assert!(Token::EOF.is_eof());
    assert_eq!(Token::EOF.len, 0);
    assert!(!Token::new(Symbol::Space, 0, 1).is_eof());
}

#[test]
fn token_display() {
    assert_eq!(Token::new(Symbol::Colon, 2, 1).to_string(), "`:`@2..3");
    assert_eq!(Token::EOF.to_string(), "end of input");
}
