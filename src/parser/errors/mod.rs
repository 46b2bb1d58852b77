//! Parser diagnostics
//!
//! Malformed input never aborts a parse. Every problem becomes a
//! [`Diagnostic`] record appended to a [`Diagnostics`] sink:
//! - Categorized error codes for filtering and documentation
//! - Byte-offset locations, convertible to line/column via
//!   [`LineIndex`](crate::base::LineIndex)
//! - Optional message overriding the code's default text

mod codes;
mod diagnostic;

pub use codes::DiagCode;
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
