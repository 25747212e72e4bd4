//! Inferred outline types: the externally visible result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title reported when no run carries the title style.
pub const TITLE_NOT_FOUND: &str = "Title not found";

/// Title reported for a document that could not be opened.
pub const OPEN_ERROR_TITLE: &str = "Error opening file";

/// Heading level assigned to a typographic style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Largest non-body style
    H1,
    /// Second largest non-body style
    H2,
    /// Third largest non-body style
    H3,
}

impl HeadingLevel {
    /// All levels, largest first.
    pub const ALL: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    /// Level for a 0-based rank among heading candidates.
    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    /// Label used in output ("H1", "H2", "H3").
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One heading occurrence in the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level
    pub level: HeadingLevel,

    /// Heading text, trimmed
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title and outline inferred for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Inferred title, or a placeholder
    pub title: String,

    /// Headings in document order
    pub outline: Vec<OutlineEntry>,
}

impl ExtractionResult {
    /// Create a result from an optional title and the outline.
    pub fn new(title: Option<String>, outline: Vec<OutlineEntry>) -> Self {
        Self {
            title: title.unwrap_or_else(|| TITLE_NOT_FOUND.to_string()),
            outline,
        }
    }

    /// Placeholder recorded for a document that could not be opened.
    pub fn open_error() -> Self {
        Self {
            title: OPEN_ERROR_TITLE.to_string(),
            outline: Vec::new(),
        }
    }

    /// Number of entries at a given level.
    pub fn count_level(&self, level: HeadingLevel) -> usize {
        self.outline.iter().filter(|e| e.level == level).count()
    }
}
