//! Lossless, error-recovering parser engine
//!
//! This module provides the machinery a recursive-descent grammar needs to
//! keep going through malformed input without losing a single byte:
//! - **logos** for fast lexing, with whitespace and comments folded into
//!   token trivia
//! - a bounded lookahead [`Window`] over any [`TokenSource`]
//! - [`ParserBase`] with `expect`, skip-bad-tokens recovery and trivia
//!   reattachment
//! - a generic separated-list routine ([`SeparatedList`])
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with leading Trivia
//!     ↓
//! Window → bounded lookahead, lazy pull
//!     ↓
//! ParserBase + grammar → owned SyntaxNode tree + Diagnostics
//! ```
//!
//! Concatenating the full text of every token in the tree, skipped tokens
//! included, reproduces the input exactly.

mod base;
pub mod errors;
mod grammar;
mod lexer;
mod list;
mod options;
mod pool;
mod source;
mod syntax;
mod syntax_kind;
mod token;
mod window;

pub use base::{ParserBase, SkipAction};
pub use errors::{DiagCode, Diagnostic, Diagnostics, Severity};
pub use grammar::{Parse, parse, parse_tokens, parse_with};
pub use lexer::{Lexer, LogosToken, tokenize};
pub use list::{ListParts, SeparatedList, TokenPredicate};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use pool::{BufferPool, PooledBuffer};
pub use source::{TokenSource, TokenStream};
pub use syntax::{LeadingTrivia, SyntaxNode, TokenOrSyntax};
pub use syntax_kind::{SyntaxKind, TokenKind, TriviaKind};
pub use token::{Token, Trivia};
pub use window::{DEFAULT_LOOKAHEAD, Window, WindowError};
