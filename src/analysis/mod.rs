//! Typographic outline inference.
//!
//! Two strictly sequential passes over a decoded [`Document`]:
//!
//! 1. [`StyleCatalog::build`] tallies every run's [`StyleKey`], and
//!    [`StyleClassifier`] turns the whole-document tally into a body style,
//!    a [`HeadingLevelMap`] and a title style.
//! 2. [`TitleLocator`] and [`OutlineWalker`] scan the document again and
//!    label runs and lines using those decisions.
//!
//! The second pass never starts before the first has seen every page.

mod catalog;
mod classifier;
mod options;
mod style;
mod title;
mod walker;

pub use catalog::StyleCatalog;
pub use classifier::{Classification, HeadingLevelMap, StyleClassifier};
pub use options::{OutlineOptions, DEFAULT_MAX_HEADING_TOKENS};
pub use style::StyleKey;
pub use title::TitleLocator;
pub use walker::OutlineWalker;

use crate::model::{Document, ExtractionResult};

/// First-pass output for one document.
#[derive(Debug, Clone)]
pub struct StyleAnalysis {
    /// Style tally over the whole document
    pub catalog: StyleCatalog,
    /// Decisions derived from the tally
    pub classification: Classification,
}

impl StyleAnalysis {
    /// Run the first pass.
    pub fn of(doc: &Document, options: &OutlineOptions) -> Self {
        let catalog = StyleCatalog::build(doc);
        let classification = StyleClassifier::new(options).classify(&catalog);

        log::debug!(
            "{} styles over {} runs; body={}, title={}",
            catalog.len(),
            catalog.total_runs(),
            describe(classification.body_style.as_ref()),
            describe(classification.title_style.as_ref()),
        );
        for (level, style) in classification.heading_levels.iter() {
            log::debug!("  {} -> {}", level, style);
        }

        Self {
            catalog,
            classification,
        }
    }

    /// Run the second pass.
    pub fn extract(&self, doc: &Document, options: &OutlineOptions) -> ExtractionResult {
        let title = TitleLocator::locate(doc, self.classification.title_style.as_ref());
        let outline = OutlineWalker::new(&self.classification.heading_levels, options).walk(doc);
        ExtractionResult::new(title, outline)
    }
}

/// Infer the title and outline of a decoded document.
pub fn extract_outline(doc: &Document, options: &OutlineOptions) -> ExtractionResult {
    StyleAnalysis::of(doc, options).extract(doc, options)
}

fn describe(style: Option<&StyleKey>) -> String {
    style.map_or_else(|| "none".to_string(), |s| s.to_string())
}
