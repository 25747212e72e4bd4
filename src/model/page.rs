//! Page-level types.

use super::TextRun;
use serde::{Deserialize, Serialize};

/// A single page in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page index (0-based)
    pub index: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Visual lines on the page
    pub lines: Vec<TextLine>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(index: u32, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
            lines: Vec::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(index: u32) -> Self {
        Self::new(index, 612.0, 792.0)
    }

    /// Create a new page with standard A4 size (210 x 297 mm).
    pub fn a4(index: u32) -> Self {
        Self::new(index, 595.0, 842.0)
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: TextLine) {
        self.lines.push(line);
    }

    /// 1-based page number as shown to readers.
    pub fn number(&self) -> u32 {
        self.index + 1
    }

    /// Lines ordered top to bottom.
    ///
    /// The sort is stable, so lines sharing a `top` keep their stored order.
    pub fn lines_top_down(&self) -> Vec<&TextLine> {
        let mut lines: Vec<&TextLine> = self.lines.iter().collect();
        lines.sort_by(|a, b| a.top.total_cmp(&b.top));
        lines
    }

    /// Iterate every run on the page in stored order.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.lines.iter().flat_map(|line| line.runs.iter())
    }

    /// Number of runs on the page.
    pub fn run_count(&self) -> usize {
        self.lines.iter().map(|line| line.runs.len()).sum()
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::letter(0)
    }
}

/// Runs that share one visual line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLine {
    /// Top of the line's bounding box, in top-down page coordinates
    pub top: f32,

    /// Runs ordered left to right
    pub runs: Vec<TextRun>,
}

impl TextLine {
    /// Create a line from runs.
    pub fn new(top: f32, runs: Vec<TextRun>) -> Self {
        Self { top, runs }
    }

    /// Create a line holding a single run.
    pub fn single(top: f32, text: impl Into<String>, font_size: f32, font: &str) -> Self {
        Self::new(top, vec![TextRun::new(text, font_size, font).at(top)])
    }

    /// Line text: run texts joined with single spaces, trimmed.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    /// The leading run, which decides the line's style.
    pub fn first_run(&self) -> Option<&TextRun> {
        self.runs.first()
    }
}
