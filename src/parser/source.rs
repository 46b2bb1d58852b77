//! The seam between the parser and whatever produces tokens

use text_size::{TextRange, TextSize};

use super::syntax_kind::TokenKind;
use super::token::Token;

/// Pull interface yielding the next token.
///
/// Once the input is exhausted a source must keep returning `EOF` tokens.
/// Only the first `EOF` may carry trivia; later ones are empty so the text
/// is never duplicated.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Token source over an already lexed sequence
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    eof: Option<Token>,
    end: TextSize,
}

impl TokenStream {
    /// A trailing `EOF` in `tokens` is honoured (with its trivia); otherwise
    /// one is synthesized at the end of the last token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind() == TokenKind::EOF => tokens.pop(),
            _ => None,
        };
        let end = eof
            .as_ref()
            .or(tokens.last())
            .map(|token| token.range().end())
            .unwrap_or_default();
        Self {
            tokens: tokens.into_iter(),
            eof,
            end,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        if let Some(token) = self.tokens.next() {
            return token;
        }
        self.eof
            .take()
            .unwrap_or_else(|| Token::new(TokenKind::EOF, TextRange::empty(self.end), ""))
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}
