//! Token and trivia value types
//!
//! Tokens are immutable. Every "modification" (prepending trivia) yields a
//! new token that shares the kind, range and text of the original. Cloning is
//! cheap: the text is a [`SmolStr`] and the trivia list is reference counted.

use std::sync::Arc;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::syntax_kind::{TokenKind, TriviaKind};

/// Non-semantic text attached to the front of a token
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Trivia {
    #[default]
    Unknown,
    Whitespace(SmolStr),
    LineComment(SmolStr),
    BlockComment(SmolStr),
    /// Tokens that failed to parse; they keep their own leading trivia
    SkippedTokens(Arc<[Token]>),
}

impl Trivia {
    /// Wrap a run of skipped tokens; an empty run yields [`Trivia::Unknown`]
    pub fn skipped(tokens: &[Token]) -> Self {
        if tokens.is_empty() {
            Self::Unknown
        } else {
            Self::SkippedTokens(tokens.into())
        }
    }

    pub fn kind(&self) -> TriviaKind {
        match self {
            Self::Unknown => TriviaKind::Unknown,
            Self::Whitespace(_) => TriviaKind::Whitespace,
            Self::LineComment(_) => TriviaKind::LineComment,
            Self::BlockComment(_) => TriviaKind::BlockComment,
            Self::SkippedTokens(_) => TriviaKind::SkippedTokens,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Tokens held by skipped-token trivia; empty for every other kind
    pub fn skipped_tokens(&self) -> &[Token] {
        match self {
            Self::SkippedTokens(tokens) => tokens,
            _ => &[],
        }
    }

    /// Append the exact source text of this trivia
    pub fn write_text(&self, out: &mut String) {
        match self {
            Self::Unknown => {}
            Self::Whitespace(text) | Self::LineComment(text) | Self::BlockComment(text) => {
                out.push_str(text)
            }
            Self::SkippedTokens(tokens) => {
                for token in tokens.iter() {
                    token.write_full_text(out);
                }
            }
        }
    }

    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

/// A lexical unit with its leading trivia
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    range: TextRange,
    text: SmolStr,
    trivia: Arc<[Trivia]>,
    missing: bool,
}

impl Token {
    pub fn new(kind: TokenKind, range: TextRange, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            range,
            text: text.into(),
            trivia: Arc::from(Vec::new()),
            missing: false,
        }
    }

    /// A zero-width placeholder standing in for a token that is not in the source
    pub fn missing(kind: TokenKind, location: TextSize) -> Self {
        Self {
            kind,
            range: TextRange::empty(location),
            text: SmolStr::default(),
            trivia: Arc::from(Vec::new()),
            missing: true,
        }
    }

    /// Same token with its leading trivia replaced
    pub fn with_trivia(&self, trivia: impl Into<Arc<[Trivia]>>) -> Self {
        Self {
            trivia: trivia.into(),
            ..self.clone()
        }
    }

    /// Same token with `prefix` inserted in front of its leading trivia.
    ///
    /// `Unknown` entries in `prefix` are dropped.
    pub fn with_prepended_trivia(&self, prefix: &[Trivia]) -> Self {
        if prefix.iter().all(Trivia::is_unknown) {
            return self.clone();
        }
        let trivia: Vec<Trivia> = prefix
            .iter()
            .filter(|trivia| !trivia.is_unknown())
            .chain(self.trivia.iter())
            .cloned()
            .collect();
        self.with_trivia(trivia)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Range of the token text, excluding leading trivia
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Start of the token text
    pub fn location(&self) -> TextSize {
        self.range.start()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn trivia(&self) -> &[Trivia] {
        &self.trivia
    }

    /// True for placeholders synthesized by `expect`
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// Append leading trivia followed by the token text
    pub fn write_full_text(&self, out: &mut String) {
        for trivia in self.trivia.iter() {
            trivia.write_text(out);
        }
        out.push_str(&self.text);
    }

    pub fn full_text(&self) -> String {
        let mut out = String::new();
        self.write_full_text(&mut out);
        out
    }
}
