//! Document model types.
//!
//! The decoding layer fills a [`Document`] with pages of styled
//! [`TextLine`]s; the analysis reads it and produces an
//! [`ExtractionResult`]. The model is independent of any PDF library.

mod document;
mod outline;
mod page;
mod run;

pub use document::{Document, Metadata};
pub use outline::{
    ExtractionResult, HeadingLevel, OutlineEntry, OPEN_ERROR_TITLE, TITLE_NOT_FOUND,
};
pub use page::{Page, TextLine};
pub use run::TextRun;
