//! PDF decoding: from file bytes to pages of styled lines.

pub mod backend;
mod content;
mod layout;
mod options;
mod pdf_parser;

pub use backend::{LopdfBackend, PdfBackend};
pub use content::{strip_subset_prefix, ContentInterpreter, Matrix};
pub use layout::{is_spaceless_script_char, LayoutAnalyzer, TextSpan};
pub use options::{ErrorMode, ParseOptions, DEFAULT_LINE_TOLERANCE};
pub use pdf_parser::PdfParser;
