//! Reusable source snippets and hand-built token sources.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use salvage::parser::{Token, TokenKind, TokenSource, TokenStream, Trivia};
use salvage::{TextRange, TextSize};

/// Inputs that parse without a single diagnostic
pub const WELL_FORMED: &[&str] = &[
    "",
    "()",
    "(a)",
    "(a, b, c)",
    "((a), (b, (c, 1)))",
    "x 1 \"s\" (y)",
    "/* lead */ (a, // note\n b) // tail",
];

/// Inputs that exercise recovery
pub const MALFORMED: &[&str] = &[
    "(",
    ")",
    "(a ??? , b)",
    "(a b)",
    "(a, b",
    "(,,)",
    "(a, ; b)",
    "((a, b) c ! ]",
    "$ (é) ~",
    "\"unterminated",
];

/// Build a token stream from bare kinds, one byte per token, separated by
/// a single space of whitespace trivia
pub fn stream(kinds: &[TokenKind]) -> TokenStream {
    let mut tokens = Vec::with_capacity(kinds.len());
    let mut offset = 0u32;
    for (index, &kind) in kinds.iter().enumerate() {
        if index > 0 {
            offset += 1;
        }
        let text = kind.as_str().unwrap_or("x");
        let len = text.len() as u32;
        let range = TextRange::at(TextSize::new(offset), TextSize::new(len));
        let token = Token::new(kind, range, text);
        let token = if index > 0 {
            token.with_trivia(vec![Trivia::Whitespace(" ".into())])
        } else {
            token
        };
        tokens.push(token);
        offset += len;
    }
    TokenStream::new(tokens)
}

/// Token source that records how many tokens have been pulled from it
pub struct CountingSource {
    inner: TokenStream,
    pulled: Rc<Cell<usize>>,
}

impl CountingSource {
    pub fn new(kinds: &[TokenKind]) -> (Self, Rc<Cell<usize>>) {
        let pulled = Rc::new(Cell::new(0));
        let source = Self {
            inner: stream(kinds),
            pulled: Rc::clone(&pulled),
        };
        (source, pulled)
    }
}

impl TokenSource for CountingSource {
    fn next_token(&mut self) -> Token {
        self.pulled.set(self.pulled.get() + 1);
        self.inner.next_token()
    }
}
