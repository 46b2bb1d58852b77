//! # salvage
//!
//! Lossless, error-recovering parsing engine.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, lookahead window, recovery, separated lists
//!   ↓
//! base      → Primitives (TextRange, TextSize, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser)
// ============================================================================

/// Foundation types: TextRange, TextSize, line/column mapping
pub mod base;

/// Parser: tokens and trivia, lookahead window, recovery, separated lists
pub mod parser;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};

// Re-export the entry points
pub use parser::{Diagnostics, Parse, ParserOptions, parse, parse_with};
