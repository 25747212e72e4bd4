//! Styled text runs.

use serde::{Deserialize, Serialize};

/// A contiguous span of text drawn with one font at one size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Effective font size in points, as decoded (not rounded)
    pub font_size: f32,

    /// Base font name (e.g., "Helvetica-Bold")
    pub font_family: String,

    /// Top of the run's bounding box, in top-down page coordinates
    pub top: f32,
}

impl TextRun {
    /// Create a new run positioned at the top of the page.
    pub fn new(text: impl Into<String>, font_size: f32, font_family: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_family: font_family.into(),
            top: 0.0,
        }
    }

    /// Set the run's vertical position.
    pub fn at(mut self, top: f32) -> Self {
        self.top = top;
        self
    }

    /// Check if the run carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
