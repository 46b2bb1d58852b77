//! Logos-based lexer
//!
//! Fast tokenization using the logos crate. Whitespace and comments never
//! reach the parser as tokens: they are folded into the leading trivia of
//! the next real token, and trivia at the very end rides on `EOF`. Text the
//! patterns cannot classify becomes one `UNKNOWN` token per contiguous run.

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::source::TokenSource;
use super::syntax_kind::TokenKind;
use super::token::{Token, Trivia};

/// Lexer wrapping the logos-generated tokenizer.
///
/// Locations are `u32` byte offsets, so sources must be smaller than 4 GiB.
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    /// One raw token read ahead while merging an error run
    pending: Option<(Result<LogosToken, ()>, std::ops::Range<usize>)>,
    trivia: Vec<Trivia>,
    eof_emitted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: LogosToken::lexer(source),
            pending: None,
            trivia: Vec::new(),
            eof_emitted: false,
        }
    }

    fn next_raw(&mut self) -> Option<(Result<LogosToken, ()>, std::ops::Range<usize>)> {
        if let Some(raw) = self.pending.take() {
            return Some(raw);
        }
        let result = self.inner.next()?;
        Some((result, self.inner.span()))
    }

    fn slice(&self, span: &std::ops::Range<usize>) -> SmolStr {
        SmolStr::new(&self.source[span.clone()])
    }

    fn make_token(&mut self, kind: TokenKind, span: std::ops::Range<usize>) -> Token {
        let range = TextRange::new(text_size(span.start), text_size(span.end));
        let token = Token::new(kind, range, &self.source[span]);
        if self.trivia.is_empty() {
            token
        } else {
            token.with_trivia(std::mem::take(&mut self.trivia))
        }
    }

    fn eof(&mut self) -> Token {
        let end = text_size(self.source.len());
        if self.eof_emitted {
            return Token::new(TokenKind::EOF, TextRange::empty(end), "");
        }
        self.eof_emitted = true;
        self.make_token(TokenKind::EOF, self.source.len()..self.source.len())
    }
}

/// Offsets past `u32::MAX` saturate; sources must be smaller than 4 GiB
fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::new(u32::MAX))
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        loop {
            let Some((result, span)) = self.next_raw() else {
                return self.eof();
            };

            let logos_token = match result {
                Ok(token) => token,
                Err(()) => {
                    // Merge the whole error run so multi-byte characters stay intact
                    let start = span.start;
                    let mut end = span.end;
                    while let Some((next, next_span)) = self.next_raw() {
                        if next.is_ok() {
                            self.pending = Some((next, next_span));
                            break;
                        }
                        end = next_span.end;
                    }
                    return self.make_token(TokenKind::UNKNOWN, start..end);
                }
            };

            let trivia = match logos_token {
                LogosToken::Whitespace => Trivia::Whitespace(self.slice(&span)),
                LogosToken::LineComment => Trivia::LineComment(self.slice(&span)),
                LogosToken::BlockComment => Trivia::BlockComment(self.slice(&span)),
                other => return self.make_token(other.into(), span),
            };
            self.trivia.push(trivia);
        }
    }
}

/// Tokenize an entire string, up to and including the first `EOF`
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind() == TokenKind::EOF;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("@")]
    At,
    #[token("#")]
    Hash,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            // Trivia is folded by the lexer and never converted
            LogosToken::Whitespace | LogosToken::LineComment | LogosToken::BlockComment => {
                TokenKind::UNKNOWN
            }
            LogosToken::Ident => TokenKind::IDENT,
            LogosToken::Integer => TokenKind::INTEGER,
            LogosToken::String => TokenKind::STRING,
            LogosToken::LParen => TokenKind::L_PAREN,
            LogosToken::RParen => TokenKind::R_PAREN,
            LogosToken::LBrace => TokenKind::L_BRACE,
            LogosToken::RBrace => TokenKind::R_BRACE,
            LogosToken::LBracket => TokenKind::L_BRACKET,
            LogosToken::RBracket => TokenKind::R_BRACKET,
            LogosToken::Comma => TokenKind::COMMA,
            LogosToken::Semicolon => TokenKind::SEMICOLON,
            LogosToken::Colon => TokenKind::COLON,
            LogosToken::Dot => TokenKind::DOT,
            LogosToken::Eq => TokenKind::EQ,
            LogosToken::Plus => TokenKind::PLUS,
            LogosToken::Minus => TokenKind::MINUS,
            LogosToken::Star => TokenKind::STAR,
            LogosToken::Slash => TokenKind::SLASH,
            LogosToken::Question => TokenKind::QUESTION,
            LogosToken::Bang => TokenKind::BANG,
            LogosToken::At => TokenKind::AT,
            LogosToken::Hash => TokenKind::HASH,
        }
    }
}
