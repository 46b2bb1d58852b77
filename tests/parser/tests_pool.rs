//! Checked-out buffers never leak state into the next checkout.

use salvage::parser::{BufferPool, DiagCode, Diagnostics, ParserBase, TokenKind, Trivia};

use crate::helpers::source_fixtures::stream;

#[test]
fn test_sequential_checkouts_start_empty() {
    let pool: BufferPool<u32> = BufferPool::new();
    for round in 0..10 {
        let mut buffer = pool.get();
        assert!(buffer.is_empty(), "residual data in round {round}");
        buffer.extend(0..round);
    }
    assert_eq!(pool.available(), 1);
}

#[test]
fn test_storage_is_reused_after_release() {
    let pool: BufferPool<u32> = BufferPool::new();
    let capacity = {
        let mut buffer = pool.get();
        buffer.extend(0..64);
        buffer.capacity()
    };
    let buffer = pool.get();
    assert!(buffer.is_empty());
    assert!(buffer.capacity() >= capacity);
}

#[test]
fn test_nested_checkouts_are_distinct() {
    let pool: BufferPool<u32> = BufferPool::new();
    let mut outer = pool.get();
    outer.push(1);
    {
        let mut inner = pool.get();
        assert!(inner.is_empty());
        inner.push(2);
    }
    assert_eq!(outer.as_slice(), &[1]);
    let again = pool.get();
    assert!(again.is_empty());
}

#[test]
fn test_parser_pools_are_released_across_recovery() {
    let mut source = stream(&[
        TokenKind::QUESTION,
        TokenKind::QUESTION,
        TokenKind::IDENT,
        TokenKind::QUESTION,
    ]);
    let mut diagnostics = Diagnostics::new();
    let mut p = ParserBase::new(&mut source, &mut diagnostics);
    let is_ident = |kind: TokenKind| kind == TokenKind::IDENT;

    let (_, first) = p.skip_bad_tokens(is_ident, |_| false, DiagCode::E0901);
    assert_eq!(p.token_pool().available(), 1);
    p.consume();
    let (_, second) = p.skip_bad_tokens(is_ident, |_| false, DiagCode::E0901);

    // the second run holds only its own token
    assert_eq!(first.skipped_tokens().len(), 2);
    assert_eq!(second.skipped_tokens().len(), 1);
    assert!(matches!(second, Trivia::SkippedTokens(_)));
    assert_eq!(p.token_pool().available(), 1);
}
