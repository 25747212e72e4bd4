//! PDF document parser using lopdf.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use lopdf::{Dictionary, Object};

use crate::detect::{sniff_bytes, sniff_file};
use crate::error::{Error, Result};
use crate::model::{Document, Metadata, Page, TextLine};

use super::backend::{decode_text_simple, LopdfBackend, PageId, PdfBackend};
use super::content::ContentInterpreter;
use super::layout::LayoutAnalyzer;
use super::options::{ErrorMode, ParseOptions};

/// PDF document parser.
///
/// Decodes every page into lines of styled runs. The result is a
/// [`Document`] that owns no reference back to the PDF.
pub struct PdfParser {
    backend: LopdfBackend,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        let header = sniff_file(path)?;
        log::debug!("Opening {} ({})", path.display(), header);

        let backend = LopdfBackend::load_file(path)?;
        Ok(Self { backend, options })
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        sniff_bytes(data)?;
        let backend = LopdfBackend::load_bytes(data)?;
        Ok(Self { backend, options })
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Decode the document into pages of styled lines.
    ///
    /// In strict mode the first page that fails to decode fails the whole
    /// document. In lenient mode that page is kept with no lines.
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new();
        document.metadata = self.extract_metadata();

        let pages = self.backend.pages();
        document.metadata.page_count = pages.len() as u32;

        for (index, (page_num, page_id)) in pages.into_iter().enumerate() {
            let (width, height) = self.backend.page_size(page_id);
            let mut page = Page::new(index as u32, width, height);

            match self.decode_page(page_id, height) {
                Ok(lines) => page.lines = lines,
                Err(e) => {
                    let err = Error::PageDecode {
                        page: page_num,
                        message: e.to_string(),
                    };
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(err);
                    }
                    log::warn!("{}; keeping an empty page", err);
                }
            }

            document.add_page(page);
        }

        log::debug!(
            "Decoded {} pages, {} runs",
            document.page_count(),
            document.run_count()
        );
        Ok(document)
    }

    fn decode_page(&self, page_id: PageId, height: f32) -> Result<Vec<TextLine>> {
        let content = self.backend.page_content(page_id)?;
        if content.is_empty() {
            return Ok(Vec::new());
        }

        let ops = self.backend.decode_content(&content)?;
        let spans = ContentInterpreter::new(&self.backend, page_id).run(&ops);
        Ok(LayoutAnalyzer::new(self.options.line_tolerance).build_lines(spans, height))
    }

    /// Extract document metadata from the info dictionary.
    fn extract_metadata(&self) -> Metadata {
        let mut metadata = Metadata::with_version(self.backend.version());
        metadata.encrypted = self.backend.is_encrypted();

        let Some(info) = self.info_dictionary() else {
            return metadata;
        };

        metadata.title = get_string_from_dict(info, b"Title");
        metadata.author = get_string_from_dict(info, b"Author");
        metadata.creator = get_string_from_dict(info, b"Creator");
        metadata.producer = get_string_from_dict(info, b"Producer");
        metadata.created = get_string_from_dict(info, b"CreationDate").and_then(|s| parse_pdf_date(&s));
        metadata.modified = get_string_from_dict(info, b"ModDate").and_then(|s| parse_pdf_date(&s));

        metadata
    }

    fn info_dictionary(&self) -> Option<&Dictionary> {
        let doc = self.backend.raw_doc();
        match doc.trailer.get(b"Info").ok()? {
            Object::Reference(r) => doc.get_dictionary(*r).ok(),
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.backend.pages().len() as u32
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.backend.is_encrypted()
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.backend.version()
    }
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_text_simple(bytes)),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).to_string()),
        _ => None,
    }
}

/// Parse a PDF date string (`D:YYYYMMDDHHmmSSOHH'mm'`) into UTC.
///
/// Missing trailing fields default to their minimum; a missing offset
/// means UTC.
fn parse_pdf_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    let s = s.strip_prefix("D:").unwrap_or(s);

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let field = |range: std::ops::Range<usize>, default: u32| {
        s.get(range)
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(default)
    };
    let month = field(4..6, 1);
    let day = field(6..8, 1);
    let hour = field(8..10, 0);
    let minute = field(10..12, 0);
    let second = field(12..14, 0);

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;

    let offset = s.get(14..).map(parse_utc_offset).unwrap_or(Some(0))?;
    let zone = FixedOffset::east_opt(offset)?;
    zone.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Offset in seconds from a `Z`, `+HH'mm'` or `-HH'mm'` suffix.
fn parse_utc_offset(suffix: &str) -> Option<i32> {
    let mut chars = suffix.chars();
    let sign = match chars.next() {
        None | Some('Z') => return Some(0),
        Some('+') => 1,
        Some('-') => -1,
        Some(_) => return None,
    };

    let digits: String = chars.filter(char::is_ascii_digit).collect();
    let hours: i32 = digits.get(0..2).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minutes: i32 = digits.get(2..4).and_then(|m| m.parse().ok()).unwrap_or(0);
    Some(sign * (hours * 3600 + minutes * 60))
}
