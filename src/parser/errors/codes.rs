//! Diagnostic code definitions
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E02xx: Structural errors (required tokens)
//! - E09xx: Unexpected input

use std::fmt;

/// Codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagCode {
    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// A required token is absent; a placeholder was synthesized
    E0201,
    /// Nesting exceeds the configured depth; the nested text was kept unparsed
    E0202,

    // =========================================================================
    // E09xx: Unexpected input
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Unexpected token inside a delimited list
    E0902,
}

impl DiagCode {
    /// Get the string representation of the code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0201 | Self::E0202 => "structural error",
            Self::E0901 | Self::E0902 => "syntax error",
        }
    }

    /// Get the default message template for this code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0201 => "expected token",
            Self::E0202 => "nesting too deep",
            Self::E0901 => "unexpected token",
            Self::E0902 => "unexpected token in list",
        }
    }

    /// Whether the code reports a synthesized placeholder token
    pub fn is_missing_token(&self) -> bool {
        matches!(self, Self::E0201)
    }
}

impl fmt::Display for DiagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
