#![allow(clippy::unwrap_used)]

//! Lookahead bounds and lazy pulling.

use rstest::rstest;
use salvage::parser::{
    DEFAULT_LOOKAHEAD, Diagnostics, ParserBase, ParserOptions, TokenKind, Window, WindowError,
};

use crate::helpers::source_fixtures::{CountingSource, stream};

fn idents(count: usize) -> Vec<TokenKind> {
    vec![TokenKind::IDENT; count]
}

#[test]
fn test_default_capacity() {
    let mut source = stream(&[]);
    let window = Window::new(&mut source);
    assert_eq!(window.capacity(), DEFAULT_LOOKAHEAD);
    assert_eq!(DEFAULT_LOOKAHEAD, 32);
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(31)]
fn test_peek_within_capacity_buffers_at_most_capacity(#[case] offset: usize) {
    let (mut source, pulled) = CountingSource::new(&idents(100));
    let mut window = Window::new(&mut source);

    window.peek_at(offset);
    assert_eq!(window.count(), offset + 1);
    assert!(window.count() <= window.capacity());
    assert_eq!(pulled.get(), offset + 1);
}

#[test]
fn test_peek_beyond_capacity_is_a_defined_failure() {
    let (mut source, pulled) = CountingSource::new(&idents(100));
    let mut window = Window::new(&mut source);

    let err = window.try_peek_at(DEFAULT_LOOKAHEAD).unwrap_err();
    assert_eq!(
        err,
        WindowError::LookaheadExceeded {
            offset: 32,
            capacity: 32
        }
    );
    assert_eq!(
        err.to_string(),
        "lookahead offset 32 exceeds window capacity 32"
    );
    // nothing was pulled to satisfy the bad request
    assert_eq!(pulled.get(), 0);
}

#[test]
#[should_panic(expected = "exceeds window capacity")]
fn test_parser_peek_beyond_configured_capacity_panics() {
    let mut source = stream(&idents(10));
    let mut diagnostics = Diagnostics::new();
    let options = ParserOptions::default().with_lookahead(4);
    let mut p = ParserBase::with_options(&mut source, &mut diagnostics, &options);
    p.peek_at(4);
}

#[test]
fn test_consume_keeps_buffer_bounded() {
    let (mut source, pulled) = CountingSource::new(&idents(50));
    let mut window = Window::new(&mut source);

    for _ in 0..50 {
        window.peek_at(DEFAULT_LOOKAHEAD - 1);
        assert!(window.count() <= DEFAULT_LOOKAHEAD);
        window.consume();
    }
    assert!(window.at(TokenKind::EOF));
    assert!(pulled.get() <= 50 + DEFAULT_LOOKAHEAD);
}

#[test]
fn test_consume_if_and_last_consumed() {
    let mut source = stream(&[TokenKind::L_PAREN, TokenKind::IDENT]);
    let mut window = Window::new(&mut source);

    assert!(window.consume_if(TokenKind::IDENT).is_none());
    assert!(window.last_consumed().is_none());

    let open = window.consume_if(TokenKind::L_PAREN).unwrap();
    assert_eq!(open.kind(), TokenKind::L_PAREN);
    assert_eq!(window.last_consumed().map(|t| t.kind()), Some(TokenKind::L_PAREN));
    assert!(window.at(TokenKind::IDENT));
}

#[test]
fn test_source_past_eof_keeps_yielding_eof() {
    let mut source = stream(&[TokenKind::IDENT]);
    let mut window = Window::new(&mut source);

    window.consume();
    for _ in 0..5 {
        assert_eq!(window.consume().kind(), TokenKind::EOF);
    }
}
