//! Layout analysis: grouping positioned spans into visual lines.
//!
//! The content interpreter emits [`TextSpan`]s in stream order with
//! bottom-up PDF coordinates. This module groups them by baseline, orders
//! each line left to right, merges neighbouring spans that share a style
//! into one run, and converts positions to top-down page coordinates.

use crate::model::{TextLine, TextRun};

/// Fraction of the font size above the baseline taken as the ascent.
const ASCENT_RATIO: f32 = 0.8;

/// A text span with position and style information.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline, bottom-up)
    pub y: f32,
    /// Estimated advance width
    pub width: f32,
    /// Effective font size in points
    pub font_size: f32,
    /// Font name (e.g., "Helvetica-Bold")
    pub font_name: String,
}

impl TextSpan {
    /// Create a span with no width estimate.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_size: f32, font_name: &str) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width: 0.0,
            font_size,
            font_name: font_name.to_string(),
        }
    }

    /// Set the advance width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Top edge in top-down coordinates for a page of `page_height`.
    pub fn top(&self, page_height: f32) -> f32 {
        page_height - (self.y + self.font_size * ASCENT_RATIO)
    }

    fn same_style(&self, other: &TextSpan) -> bool {
        self.font_name == other.font_name && (self.font_size - other.font_size).abs() < 0.01
    }

    fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Groups spans into lines of styled runs.
#[derive(Debug, Clone, Copy)]
pub struct LayoutAnalyzer {
    /// Baseline tolerance as a fraction of font size
    line_tolerance: f32,
}

impl Default for LayoutAnalyzer {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl LayoutAnalyzer {
    /// Create an analyzer with the given baseline tolerance.
    pub fn new(line_tolerance: f32) -> Self {
        Self { line_tolerance }
    }

    /// Build a page's lines, ordered top to bottom.
    pub fn build_lines(&self, spans: Vec<TextSpan>, page_height: f32) -> Vec<TextLine> {
        let mut lines: Vec<TextLine> = self
            .group_spans_into_lines(spans)
            .into_iter()
            .filter_map(|line_spans| line_from_spans(line_spans, page_height))
            .collect();

        lines.sort_by(|a, b| a.top.total_cmp(&b.top));
        lines
    }

    /// Group spans sharing a baseline, within tolerance.
    fn group_spans_into_lines(&self, mut spans: Vec<TextSpan>) -> Vec<Vec<TextSpan>> {
        // PDF y grows upwards, so descending y reads top to bottom.
        spans.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

        let mut lines: Vec<Vec<TextSpan>> = Vec::new();
        let mut current: Vec<TextSpan> = Vec::new();
        let mut current_y: Option<f32> = None;

        for span in spans {
            let tolerance = span.font_size * self.line_tolerance;
            match current_y {
                Some(y) if (span.y - y).abs() <= tolerance => current.push(span),
                _ => {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                    current_y = Some(span.y);
                    current.push(span);
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        for line in &mut lines {
            line.sort_by(|a, b| a.x.total_cmp(&b.x));
        }
        lines
    }
}

/// Merge a line's spans into runs and place it on the page.
fn line_from_spans(spans: Vec<TextSpan>, page_height: f32) -> Option<TextLine> {
    let mut merged: Vec<TextSpan> = Vec::new();

    for span in spans {
        match merged.last_mut() {
            Some(prev) if prev.same_style(&span) => {
                if needs_space_between(prev, &span) {
                    prev.text.push(' ');
                }
                prev.text.push_str(&span.text);
                prev.width = (span.right() - prev.x).max(prev.width);
            }
            _ => merged.push(span),
        }
    }

    if merged.is_empty() {
        return None;
    }

    let runs: Vec<TextRun> = merged
        .into_iter()
        .map(|span| {
            let top = span.top(page_height);
            TextRun::new(span.text, span.font_size, span.font_name).at(top)
        })
        .collect();
    let top = runs
        .iter()
        .map(|run| run.top)
        .fold(f32::INFINITY, f32::min);

    Some(TextLine::new(top, runs))
}

/// Whether joining `prev` and `next` needs a word space.
///
/// A space goes in when the horizontal gap exceeds a fifth of the average
/// glyph width, unless either side already has one or both sides are
/// spaceless-script characters.
fn needs_space_between(prev: &TextSpan, next: &TextSpan) -> bool {
    let gap = next.x - prev.right();

    let char_count = next.text.chars().count();
    let avg_char_width = if char_count > 0 && next.width > 0.0 {
        next.width / char_count as f32
    } else {
        next.font_size * 0.5
    };
    if gap <= avg_char_width * 0.2 {
        return false;
    }

    let prev_last = prev.text.chars().last();
    let next_first = next.text.chars().next();
    if prev_last.is_some_and(char::is_whitespace) || next_first.is_some_and(char::is_whitespace) {
        return false;
    }

    !(prev_last.is_some_and(is_spaceless_script_char)
        && next_first.is_some_and(is_spaceless_script_char))
}

/// Check if a character belongs to a script written without word spaces.
///
/// Chinese and Japanese qualify; Korean uses word spaces and does not.
pub fn is_spaceless_script_char(c: char) -> bool {
    let code = c as u32;

    // CJK Unified Ideographs
    (0x4E00..=0x9FFF).contains(&code)
    // Extension A
    || (0x3400..=0x4DBF).contains(&code)
    // Extensions B-F
    || (0x20000..=0x2A6DF).contains(&code)
    || (0x2A700..=0x2B73F).contains(&code)
    || (0x2B740..=0x2B81F).contains(&code)
    || (0x2B820..=0x2CEAF).contains(&code)
    || (0x2CEB0..=0x2EBEF).contains(&code)
    // Hiragana
    || (0x3040..=0x309F).contains(&code)
    // Katakana
    || (0x30A0..=0x30FF).contains(&code)
    // CJK Symbols and Punctuation
    || (0x3000..=0x303F).contains(&code)
}
