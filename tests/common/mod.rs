//! Small PDFs built in memory with lopdf.

#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Font resources available on every generated page.
pub const FONTS: [(&str, &str); 3] = [
    ("F1", "Helvetica-Bold"),
    ("F2", "Helvetica"),
    ("F3", "ABCDEF+Times-Roman"),
];

/// One line of text at a baseline position.
#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    pub font: &'static str,
    pub size: i64,
    pub x: i64,
    pub y: i64,
}

/// `text` in resource font `font` at `size`, baseline at (72, `y`).
pub fn line(text: &str, font: &'static str, size: i64, y: i64) -> Line {
    Line {
        text: text.to_string(),
        font,
        size,
        x: 72,
        y,
    }
}

#[derive(Debug)]
enum PageSpec {
    Lines(Vec<Line>),
    Raw(Vec<u8>),
    /// `Contents` that is not a stream
    Broken,
}

/// Builds a PDF with one content stream per page.
#[derive(Debug, Default)]
pub struct PdfBuilder {
    pages: Vec<PageSpec>,
    info_title: Option<String>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page drawing `lines`.
    pub fn page(mut self, lines: Vec<Line>) -> Self {
        self.pages.push(PageSpec::Lines(lines));
        self
    }

    /// Add a page whose content stream is exactly `content`.
    pub fn raw_page(mut self, content: &[u8]) -> Self {
        self.pages.push(PageSpec::Raw(content.to_vec()));
        self
    }

    /// Add a page whose content cannot be decoded.
    pub fn broken_page(mut self) -> Self {
        self.pages.push(PageSpec::Broken);
        self
    }

    /// Set the info dictionary title.
    pub fn info_title(mut self, title: &str) -> Self {
        self.info_title = Some(title.to_string());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_dict = lopdf::Dictionary::new();
        for (name, base_font) in FONTS {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font,
            });
            font_dict.set(name, font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
        });

        let mut kids = Vec::new();
        for spec in &self.pages {
            let contents: Object = match spec {
                PageSpec::Lines(lines) => doc
                    .add_object(Stream::new(dictionary! {}, encode_lines(lines)))
                    .into(),
                PageSpec::Raw(bytes) => doc
                    .add_object(Stream::new(dictionary! {}, bytes.clone()))
                    .into(),
                PageSpec::Broken => Object::Integer(0),
            };
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => contents,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if let Some(title) = &self.info_title {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::string_literal(title.as_str()),
                "CreationDate" => Object::string_literal("D:20240301120000Z"),
            });
            doc.trailer.set("Info", info_id);
        }

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    /// Write the PDF to `path`.
    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

fn encode_lines(lines: &[Line]) -> Vec<u8> {
    let mut operations = Vec::new();
    for line in lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![line.font.into(), line.size.into()],
        ));
        operations.push(Operation::new("Td", vec![line.x.into(), line.y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.text.as_str())],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }.encode().unwrap()
}

/// A conventional report: title, sections, subsections and body text.
pub fn report_pdf() -> Vec<u8> {
    let mut cover = vec![
        line("Quarterly Review", "F1", 24, 720),
        line("Summary", "F1", 16, 660),
    ];
    for i in 0..8 {
        cover.push(line(
            &format!("Body paragraph line {} with ordinary words.", i),
            "F3",
            11,
            630 - i * 14,
        ));
    }

    let mut second = vec![
        line("Results", "F1", 16, 720),
        line("Regional figures", "F2", 13, 690),
    ];
    for i in 0..8 {
        second.push(line(
            &format!("More body text on the second page, line {}.", i),
            "F3",
            11,
            660 - i * 14,
        ));
    }

    PdfBuilder::new()
        .page(cover)
        .page(second)
        .info_title("Q3 Review (metadata)")
        .build()
}
