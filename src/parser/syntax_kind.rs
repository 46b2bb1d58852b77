//! Token, trivia and node kinds
//!
//! `TokenKind` is the lexical category of a [`Token`](super::Token),
//! `TriviaKind` tags the non-semantic text attached in front of a token, and
//! `SyntaxKind` names the composite nodes built by the grammar layer.

use std::fmt;

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    INTEGER, // 42
    STRING,  // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,   // (
    R_PAREN,   // )
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    COMMA,     // ,
    SEMICOLON, // ;
    COLON,     // :
    DOT,       // .
    EQ,        // =
    PLUS,      // +
    MINUS,     // -
    STAR,      // *
    SLASH,     // /
    QUESTION,  // ?
    BANG,      // !
    AT,        // @
    HASH,      // #

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Text the lexer could not classify
    UNKNOWN,
    /// End of input; token sources yield it forever once the text runs out
    EOF,
}

impl TokenKind {
    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::HASH as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(self, Self::INTEGER | Self::STRING)
    }

    /// Fixed source text of punctuation kinds
    pub fn as_str(self) -> Option<&'static str> {
        let text = match self {
            Self::L_PAREN => "(",
            Self::R_PAREN => ")",
            Self::L_BRACE => "{",
            Self::R_BRACE => "}",
            Self::L_BRACKET => "[",
            Self::R_BRACKET => "]",
            Self::COMMA => ",",
            Self::SEMICOLON => ";",
            Self::COLON => ":",
            Self::DOT => ".",
            Self::EQ => "=",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::STAR => "*",
            Self::SLASH => "/",
            Self::QUESTION => "?",
            Self::BANG => "!",
            Self::AT => "@",
            Self::HASH => "#",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "'{text}'"),
            None => match self {
                Self::IDENT => f.write_str("identifier"),
                Self::INTEGER => f.write_str("integer literal"),
                Self::STRING => f.write_str("string literal"),
                Self::EOF => f.write_str("end of file"),
                _ => f.write_str("unknown token"),
            },
        }
    }
}

/// Kind of a [`Trivia`](super::Trivia) value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriviaKind {
    /// Empty placeholder; prepending it is a no-op
    #[default]
    Unknown,
    Whitespace,
    LineComment,
    BlockComment,
    /// Tokens that failed to parse, kept verbatim
    SkippedTokens,
}

/// Kinds of composite syntax nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    SOURCE_FILE,
    /// Bookended, separated list
    LIST,
    NAME,
    LITERAL,
    /// Item synthesized where an item was required but absent
    ERROR,
}
