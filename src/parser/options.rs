//! Parser options

use super::window::DEFAULT_LOOKAHEAD;

/// Nesting depth used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables for a parse session
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Maximum number of tokens grammar code may peek ahead
    pub lookahead_capacity: usize,
    /// Maximum number of nested lists the grammar descends into; deeper
    /// lists are kept as unparsed text with a diagnostic
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            lookahead_capacity: DEFAULT_LOOKAHEAD,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserOptions {
    pub fn with_lookahead(mut self, capacity: usize) -> Self {
        self.lookahead_capacity = capacity;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
