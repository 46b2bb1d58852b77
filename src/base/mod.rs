//! Foundation types for the salvage toolchain.
//!
//! This module provides fundamental types used throughout the engine:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other salvage modules.

mod position;

pub use position::{LineCol, LineIndex};
pub use text_size::{TextRange, TextSize};

// Re-export text-size for convenience
pub use text_size;
