//! Benchmarks for outline inference.
//!
//! Run with: cargo bench
//!
//! Style analysis runs on synthetic decoded documents; the decoding path
//! runs on a hand-written PDF.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdf_outline::analysis::{OutlineOptions, StyleAnalysis, StyleCatalog, StyleClassifier};
use pdf_outline::{Document, Page, TextLine};

/// A document of `page_count` pages with a heading hierarchy and body text.
fn synthetic_document(page_count: u32) -> Document {
    let mut doc = Document::new();
    for index in 0..page_count {
        let mut page = Page::letter(index);
        page.add_line(TextLine::single(40.0, format!("Chapter {}", index + 1), 24.0, "Sans-Bold"));
        let mut top = 80.0;
        for section in 0..3 {
            page.add_line(TextLine::single(top, format!("Section {}.{}", index + 1, section), 16.0, "Sans-Bold"));
            top += 24.0;
            for line in 0..12 {
                page.add_line(TextLine::single(
                    top,
                    format!("Body text of section {} on line {} with a few more words", section, line),
                    10.0,
                    "Serif",
                ));
                top += 13.0;
            }
        }
        doc.add_page(page);
    }
    doc
}

/// Creates a minimal PDF with the given number of pages.
///
/// The xref offsets are placeholders.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut content = String::new();
    content.push_str("%PDF-1.4\n");
    content.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i * 2 + 3)).collect();
    content.push_str(&format!(
        "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
        kids.join(" "),
        page_count
    ));

    let mut next_obj = 3;
    for i in 0..page_count {
        let page_obj = next_obj;
        let content_obj = next_obj + 1;
        next_obj += 2;

        content.push_str(&format!(
            "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents {} 0 R >>\nendobj\n",
            page_obj, content_obj
        ));

        let text = format!(
            "BT /F1 24 Tf 72 720 Td (Chapter {}) Tj ET BT /F1 11 Tf 72 680 Td (Benchmark body text.) Tj ET BT /F1 11 Tf 72 666 Td (More body text.) Tj ET",
            i + 1
        );
        content.push_str(&format!(
            "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
            content_obj,
            text.len(),
            text
        ));
    }

    let xref_offset = content.len();
    content.push_str(&format!("xref\n0 {}\n", next_obj));
    content.push_str("0000000000 65535 f \n");
    for _ in 1..next_obj {
        content.push_str("0000000000 00000 n \n");
    }
    content.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        next_obj, xref_offset
    ));

    content.into_bytes()
}

/// Benchmark the first pass: tallying and classifying styles.
fn bench_style_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_analysis");

    for page_count in [1, 10, 100] {
        let doc = synthetic_document(page_count);

        group.bench_function(format!("catalog_{}_pages", page_count), |b| {
            b.iter(|| StyleCatalog::build(black_box(&doc)));
        });

        let catalog = StyleCatalog::build(&doc);
        group.bench_function(format!("classify_{}_pages", page_count), |b| {
            b.iter(|| StyleClassifier::default().classify(black_box(&catalog)));
        });
    }

    group.finish();
}

/// Benchmark the second pass: title and outline walk.
fn bench_outline_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline_walk");
    let options = OutlineOptions::default();

    for page_count in [1, 10, 100] {
        let doc = synthetic_document(page_count);
        let analysis = StyleAnalysis::of(&doc, &options);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| analysis.extract(black_box(&doc), &options));
        });
    }

    group.finish();
}

/// Benchmark decoding and analysis end to end.
fn bench_extract_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_bytes");

    for page_count in [1, 10] {
        let data = create_test_pdf(page_count);
        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| {
                let extractor = pdf_outline::Extractor::new().lenient();
                let _ = extractor.parse_bytes(black_box(&data));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_style_analysis,
    bench_outline_walk,
    bench_extract_bytes,
);
criterion_main!(benches);
