//! # pdf-outline
//!
//! Infers a PDF document's title and H1–H3 outline from typography alone.
//!
//! Each document is decoded into pages of styled text runs. A first pass
//! tallies how often each (rounded font size, font family) style occurs;
//! the most frequent style is taken as body text and the largest remaining
//! styles become heading levels. A second pass walks the pages top to
//! bottom and reports lines drawn in a heading style.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_outline::{extract_file, render};
//!
//! fn main() -> pdf_outline::Result<()> {
//!     let result = extract_file("report.pdf")?;
//!     println!("{}", render::to_json(&result, render::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Batch
//!
//! ```no_run
//! use std::path::Path;
//! use pdf_outline::batch::{BatchOptions, BatchProcessor};
//!
//! let report = BatchProcessor::new(BatchOptions::default())
//!     .run(Path::new("/app/input"), Path::new("/app/output"))?;
//! println!("{} of {} documents processed", report.succeeded(), report.processed());
//! # Ok::<(), pdf_outline::Error>(())
//! ```

pub mod analysis;
pub mod batch;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use analysis::{
    extract_outline, Classification, HeadingLevelMap, OutlineOptions, StyleAnalysis,
    StyleCatalog, StyleClassifier, StyleKey,
};
pub use batch::{BatchOptions, BatchProcessor, BatchReport, FileReport, FileStatus};
pub use detect::{has_pdf_extension, sniff_bytes, sniff_file, PdfHeader};
pub use error::{Error, Result};
pub use model::{
    Document, ExtractionResult, HeadingLevel, Metadata, OutlineEntry, Page, TextLine, TextRun,
};
pub use parser::{ErrorMode, ParseOptions, PdfParser};
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

/// Infer the title and outline of a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::extract_file;
///
/// let result = extract_file("document.pdf").unwrap();
/// for entry in &result.outline {
///     println!("{} {} (p. {})", entry.level, entry.text, entry.page);
/// }
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    Extractor::new().parse(path)
}

/// Infer the title and outline of a PDF held in memory.
pub fn extract_bytes(data: &[u8]) -> Result<ExtractionResult> {
    Extractor::new().parse_bytes(data)
}

/// Infer the title and outline of a PDF read from `reader`.
pub fn extract_reader<R: Read>(reader: R) -> Result<ExtractionResult> {
    Extractor::new().parse_reader(reader)
}

/// Infer the title and outline of an already decoded document.
///
/// Never fails: a document without text yields the "Title not found"
/// placeholder and an empty outline.
pub fn extract_document(doc: &Document) -> ExtractionResult {
    extract_outline(doc, &OutlineOptions::default())
}

/// Builder combining decoding and outline options.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::Extractor;
///
/// let result = Extractor::new()
///     .lenient()
///     .with_max_heading_tokens(12)
///     .with_max_levels(2)
///     .parse("document.pdf")?;
/// # Ok::<(), pdf_outline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    parse_options: ParseOptions,
    outline_options: OutlineOptions,
}

impl Extractor {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep going past pages that fail to decode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the decoding options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set the outline options.
    pub fn with_outline_options(mut self, options: OutlineOptions) -> Self {
        self.outline_options = options;
        self
    }

    /// Lines with more whitespace-separated tokens than this are not headings.
    pub fn with_max_heading_tokens(mut self, tokens: usize) -> Self {
        self.outline_options = self.outline_options.with_max_heading_tokens(tokens);
        self
    }

    /// Number of heading levels to assign (1 to 3).
    pub fn with_max_levels(mut self, levels: u8) -> Self {
        self.outline_options = self.outline_options.with_max_levels(levels);
        self
    }

    /// Decode and analyse a PDF file.
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionResult> {
        let parser = PdfParser::open_with_options(path, self.parse_options.clone())?;
        Ok(self.analyse(&parser.parse()?))
    }

    /// Decode and analyse a PDF from bytes.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<ExtractionResult> {
        let parser = PdfParser::from_bytes_with_options(data, self.parse_options.clone())?;
        Ok(self.analyse(&parser.parse()?))
    }

    /// Decode and analyse a PDF from a reader.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ExtractionResult> {
        let parser = PdfParser::from_reader_with_options(reader, self.parse_options.clone())?;
        Ok(self.analyse(&parser.parse()?))
    }

    /// Analyse a decoded document.
    pub fn analyse(&self, doc: &Document) -> ExtractionResult {
        extract_outline(doc, &self.outline_options)
    }
}
