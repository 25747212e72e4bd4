//! Second pass: labelling lines with heading levels.

use std::collections::HashSet;

use super::{HeadingLevelMap, OutlineOptions, StyleKey};
use crate::model::{Document, HeadingLevel, OutlineEntry, TextLine};

/// Walks a document in reading order and emits heading entries.
pub struct OutlineWalker<'a> {
    levels: &'a HeadingLevelMap,
    max_tokens: usize,
}

impl<'a> OutlineWalker<'a> {
    /// Create a walker for a level assignment.
    pub fn new(levels: &'a HeadingLevelMap, options: &OutlineOptions) -> Self {
        Self {
            levels,
            max_tokens: options.max_heading_tokens,
        }
    }

    /// Emit one entry per heading-styled line, in page then vertical order.
    ///
    /// Page numbers are 1-based positions in `doc.pages`; `Page::index` is
    /// not consulted.
    ///
    /// A line's style is its first run's style. Lines that are empty or
    /// longer than the token limit are skipped. An entry whose (text, level)
    /// pair was already emitted is dropped, even on a later page.
    pub fn walk(&self, doc: &Document) -> Vec<OutlineEntry> {
        let mut outline = Vec::new();
        if self.levels.is_empty() {
            return outline;
        }

        let mut seen: HashSet<(String, HeadingLevel)> = HashSet::new();

        for (position, page) in doc.pages.iter().enumerate() {
            let number = position as u32 + 1;
            for line in page.lines_top_down() {
                let Some((level, text)) = self.classify_line(line) else {
                    continue;
                };
                if seen.insert((text.clone(), level)) {
                    outline.push(OutlineEntry::new(level, text, number));
                }
            }
        }

        outline
    }

    /// Level and display text of a line, if it reads as a heading.
    fn classify_line(&self, line: &TextLine) -> Option<(HeadingLevel, String)> {
        let first = line.first_run()?;

        let text = line.text();
        if text.is_empty() || text.split_whitespace().count() > self.max_tokens {
            return None;
        }

        let level = self.levels.level_of(&StyleKey::of_run(first))?;
        Some((level, text))
    }
}
