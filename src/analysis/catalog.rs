//! Document-wide tally of text-run styles.

use indexmap::IndexMap;

use super::StyleKey;
use crate::model::{Document, TextRun};

/// Occurrence count per [`StyleKey`], in first-seen order.
///
/// Counts cover every run in the document, including runs the outline walk
/// later discards as noise. First-seen order is the tie-break order for all
/// classification decisions.
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    counts: IndexMap<StyleKey, usize>,
}

impl StyleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every run of every page, in page then line order.
    pub fn build(doc: &Document) -> Self {
        let mut catalog = Self::new();
        for page in &doc.pages {
            for run in page.runs() {
                catalog.record(run);
            }
        }
        catalog
    }

    /// Count one run.
    pub fn record(&mut self, run: &TextRun) {
        self.record_key(StyleKey::of_run(run));
    }

    /// Count one occurrence of a key.
    pub fn record_key(&mut self, key: StyleKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Occurrences of a key (0 when never seen).
    pub fn count(&self, key: &StyleKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct styles.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no run was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of runs recorded.
    pub fn total_runs(&self) -> usize {
        self.counts.values().sum()
    }

    /// Styles with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Styles in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.counts.keys()
    }
}

impl FromIterator<(StyleKey, usize)> for StyleCatalog {
    fn from_iter<I: IntoIterator<Item = (StyleKey, usize)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (key, count) in iter {
            *catalog.counts.entry(key).or_insert(0) += count;
        }
        catalog
    }
}
