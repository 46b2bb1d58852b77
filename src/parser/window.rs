//! Bounded lookahead over a token source
//!
//! The window pulls tokens lazily from a borrowed [`TokenSource`] into a ring
//! buffer of fixed capacity. Peeking never consumes; consuming pops the front
//! of the ring. The source may be stateful, so nothing is ever pulled before
//! a peek or consume actually needs it.

use std::collections::VecDeque;

use thiserror::Error;

use super::source::TokenSource;
use super::syntax_kind::TokenKind;
use super::token::Token;

/// Lookahead depth used when none is configured
pub const DEFAULT_LOOKAHEAD: usize = 32;

/// Misuse of the window by grammar code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("lookahead offset {offset} exceeds window capacity {capacity}")]
    LookaheadExceeded { offset: usize, capacity: usize },
}

/// Sliding window of tokens
pub struct Window<'s, S: TokenSource + ?Sized> {
    source: &'s mut S,
    buffer: VecDeque<Token>,
    capacity: usize,
    last_consumed: Option<Token>,
}

impl<'s, S: TokenSource + ?Sized> Window<'s, S> {
    pub fn new(source: &'s mut S) -> Self {
        Self::with_capacity(source, DEFAULT_LOOKAHEAD)
    }

    /// A capacity of zero is raised to one; the current token always fits
    pub fn with_capacity(source: &'s mut S, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            source,
            buffer: VecDeque::with_capacity(capacity),
            capacity,
            last_consumed: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of tokens pulled from the source but not yet consumed
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    pub fn last_consumed(&self) -> Option<&Token> {
        self.last_consumed.as_ref()
    }

    /// Token `offset` positions ahead of the current one
    pub fn try_peek_at(&mut self, offset: usize) -> Result<&Token, WindowError> {
        if offset >= self.capacity {
            return Err(WindowError::LookaheadExceeded {
                offset,
                capacity: self.capacity,
            });
        }
        while self.buffer.len() <= offset {
            self.buffer.push_back(self.source.next_token());
        }
        Ok(&self.buffer[offset])
    }

    /// Like [`Window::try_peek_at`], treating an out-of-range offset as a
    /// broken grammar.
    ///
    /// # Panics
    /// Panics if `offset` is not below the window capacity.
    pub fn peek_at(&mut self, offset: usize) -> &Token {
        match self.try_peek_at(offset) {
            Ok(token) => token,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn peek(&mut self) -> &Token {
        self.peek_at(0)
    }

    pub fn at(&mut self, kind: TokenKind) -> bool {
        self.peek().kind() == kind
    }

    /// Return the current token and advance past it
    pub fn consume(&mut self) -> Token {
        let token = self
            .buffer
            .pop_front()
            .unwrap_or_else(|| self.source.next_token());
        self.last_consumed = Some(token.clone());
        token
    }

    pub fn consume_if(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.consume())
        } else {
            None
        }
    }
}
