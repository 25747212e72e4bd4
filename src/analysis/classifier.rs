//! Deciding which styles are body text, headings, and the title.
//!
//! The heuristic is frequency and size only: the most repeated style is
//! body text, the largest remaining styles are headings, and the largest
//! style overall is the title. Boldness, colour and indentation are ignored.

use super::{OutlineOptions, StyleCatalog, StyleKey};
use crate::model::HeadingLevel;

/// Ordered mapping from heading level to style, at most three entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingLevelMap {
    entries: Vec<(HeadingLevel, StyleKey)>,
}

impl HeadingLevelMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign levels H1, H2, ... to styles in the given order.
    ///
    /// Styles beyond the last level are ignored.
    pub fn from_ranked<I: IntoIterator<Item = StyleKey>>(styles: I) -> Self {
        let entries = styles
            .into_iter()
            .enumerate()
            .map_while(|(rank, style)| HeadingLevel::from_rank(rank).map(|level| (level, style)))
            .collect();
        Self { entries }
    }

    /// Style assigned to a level.
    pub fn style(&self, level: HeadingLevel) -> Option<&StyleKey> {
        self.entries
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, style)| style)
    }

    /// Level of a style; the first matching entry wins.
    pub fn level_of(&self, style: &StyleKey) -> Option<HeadingLevel> {
        self.entries
            .iter()
            .find(|(_, s)| s == style)
            .map(|(level, _)| *level)
    }

    /// Entries in level order.
    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, &StyleKey)> {
        self.entries.iter().map(|(level, style)| (*level, style))
    }

    /// Number of assigned levels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no level is assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of classifying a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Style excluded as body text (none when the document has one style)
    pub body_style: Option<StyleKey>,

    /// Heading level assignment
    pub heading_levels: HeadingLevelMap,

    /// Style of the title (none for a document without text)
    pub title_style: Option<StyleKey>,
}

/// Classifies the styles of a [`StyleCatalog`].
#[derive(Debug, Clone)]
pub struct StyleClassifier {
    max_levels: usize,
}

impl Default for StyleClassifier {
    fn default() -> Self {
        Self::new(&OutlineOptions::default())
    }
}

impl StyleClassifier {
    /// Create a classifier assigning up to `options.max_levels` levels.
    pub fn new(options: &OutlineOptions) -> Self {
        Self {
            max_levels: options.max_levels.clamp(1, 3) as usize,
        }
    }

    /// Classify with default options.
    pub fn classify_default(catalog: &StyleCatalog) -> Classification {
        Self::default().classify(catalog)
    }

    /// Decide body, heading and title styles from the whole-document tally.
    pub fn classify(&self, catalog: &StyleCatalog) -> Classification {
        if catalog.is_empty() {
            return Classification::default();
        }

        let body_style = body_style(catalog);

        let mut candidates: Vec<&StyleKey> = catalog
            .keys()
            .filter(|key| Some(*key) != body_style)
            .collect();
        // Stable: equal sizes keep first-seen order.
        candidates.sort_by(|a, b| b.size_pt.cmp(&a.size_pt));

        let heading_levels =
            HeadingLevelMap::from_ranked(candidates.into_iter().take(self.max_levels).cloned());

        Classification {
            body_style: body_style.cloned(),
            heading_levels,
            title_style: largest_style(catalog).cloned(),
        }
    }
}

/// Most frequent style; first seen wins ties. None with a single style.
fn body_style(catalog: &StyleCatalog) -> Option<&StyleKey> {
    if catalog.len() < 2 {
        return None;
    }
    let mut best: Option<(&StyleKey, usize)> = None;
    for (key, count) in catalog.iter() {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

/// Largest size overall; first seen wins ties.
fn largest_style(catalog: &StyleCatalog) -> Option<&StyleKey> {
    let mut best: Option<&StyleKey> = None;
    for key in catalog.keys() {
        if best.map_or(true, |b| key.size_pt > b.size_pt) {
            best = Some(key);
        }
    }
    best
}
