//! Parser limits.

/// Node capacity used when the caller has no better estimate.
pub const DEFAULT_CAPACITY: usize = 256;

/// Maximum nesting of expressions and blocks before parsing is aborted.
///
/// Each level costs a few recursive frames, so this keeps a parse well
/// inside a default thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
