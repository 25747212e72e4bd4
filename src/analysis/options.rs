//! Outline inference options.

/// Default upper bound on whitespace-separated tokens in a heading line.
pub const DEFAULT_MAX_HEADING_TOKENS: usize = 20;

/// Options for classifying styles and walking the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Lines with more tokens than this are treated as body text
    pub max_heading_tokens: usize,

    /// Number of heading levels to assign (1-3)
    pub max_levels: u8,
}

impl OutlineOptions {
    /// Create new outline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token limit for heading lines.
    pub fn with_max_heading_tokens(mut self, tokens: usize) -> Self {
        self.max_heading_tokens = tokens;
        self
    }

    /// Set the number of heading levels.
    pub fn with_max_levels(mut self, levels: u8) -> Self {
        self.max_levels = levels.clamp(1, 3);
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_heading_tokens: DEFAULT_MAX_HEADING_TOKENS,
            max_levels: 3,
        }
    }
}
