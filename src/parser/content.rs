//! Content-stream interpretation into positioned text spans.
//!
//! Tracks just enough graphics and text state to place each text-showing
//! operation on the page and to know its effective font size: the CTM with
//! `q`/`Q`/`cm`, the text and line matrices, leading and horizontal scaling.

use std::collections::HashMap;

use super::backend::{ContentOp, PageId, PdfBackend, PdfValue};
use super::layout::{is_spaceless_script_char, TextSpan};

/// Fraction of the font size used as the advance of one glyph.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// TJ adjustments beyond this (thousandths of text space) read as word gaps.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// 2D affine transform in PDF row-vector form `[a b c d e f]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn translation(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// `self × other`: apply `self` first, then `other`.
    pub fn then(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Length of the transformed unit y vector.
    pub fn vertical_scale(&self) -> f32 {
        (self.c * self.c + self.d * self.d).sqrt()
    }

    /// Length of the transformed unit x vector.
    pub fn horizontal_scale(&self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// Interprets one page's operations into [`TextSpan`]s.
pub struct ContentInterpreter<'a, B: PdfBackend + ?Sized> {
    backend: &'a B,
    page: PageId,
    fonts: HashMap<Vec<u8>, String>,

    ctm: Matrix,
    ctm_stack: Vec<Matrix>,
    text_matrix: Matrix,
    line_matrix: Matrix,
    font_resource: Vec<u8>,
    font_name: String,
    font_size: f32,
    leading: f32,
    horizontal_scaling: f32,
    in_text_block: bool,
}

impl<'a, B: PdfBackend + ?Sized> ContentInterpreter<'a, B> {
    /// Create an interpreter for a page; font names come from the backend.
    pub fn new(backend: &'a B, page: PageId) -> Self {
        let fonts = backend
            .page_fonts(page)
            .map(|fonts| {
                fonts
                    .into_iter()
                    .map(|f| (f.name, strip_subset_prefix(&f.base_font).to_string()))
                    .collect()
            })
            .unwrap_or_else(|e| {
                log::debug!("No font resources for page {:?}: {}", page, e);
                HashMap::new()
            });

        Self {
            backend,
            page,
            fonts,
            ctm: Matrix::IDENTITY,
            ctm_stack: Vec::new(),
            text_matrix: Matrix::IDENTITY,
            line_matrix: Matrix::IDENTITY,
            font_resource: Vec::new(),
            font_name: String::new(),
            font_size: 12.0,
            leading: 0.0,
            horizontal_scaling: 1.0,
            in_text_block: false,
        }
    }

    /// Run all operations and return the spans they draw, in stream order.
    pub fn run(mut self, ops: &[ContentOp]) -> Vec<TextSpan> {
        let mut spans = Vec::new();

        for op in ops {
            match op.operator.as_str() {
                "q" => self.ctm_stack.push(self.ctm),
                "Q" => {
                    if let Some(ctm) = self.ctm_stack.pop() {
                        self.ctm = ctm;
                    }
                }
                "cm" if op.operands.len() >= 6 => {
                    self.ctm = matrix_operand(op).then(&self.ctm);
                }
                "BT" => {
                    self.in_text_block = true;
                    self.text_matrix = Matrix::IDENTITY;
                    self.line_matrix = Matrix::IDENTITY;
                }
                "ET" => self.in_text_block = false,
                "Tf" if op.operands.len() >= 2 => {
                    if let Some(PdfValue::Name(name)) = op.operands.first() {
                        self.font_name = self
                            .fonts
                            .get(name)
                            .cloned()
                            .unwrap_or_else(|| String::from_utf8_lossy(name).to_string());
                        self.font_resource = name.clone();
                    }
                    self.font_size = op.number(1, 12.0);
                }
                "TL" => self.leading = op.number(0, 0.0),
                "Tz" => self.horizontal_scaling = op.number(0, 100.0) / 100.0,
                "Td" => self.move_line(op.number(0, 0.0), op.number(1, 0.0)),
                "TD" => {
                    let ty = op.number(1, 0.0);
                    self.leading = -ty;
                    self.move_line(op.number(0, 0.0), ty);
                }
                "Tm" if op.operands.len() >= 6 => {
                    self.line_matrix = matrix_operand(op);
                    self.text_matrix = self.line_matrix;
                }
                "T*" => self.next_line(),
                "Tj" | "TJ" => {
                    if let Some(operand) = op.operands.first() {
                        self.show(operand, &mut spans);
                    }
                }
                "'" => {
                    self.next_line();
                    if let Some(operand) = op.operands.first() {
                        self.show(operand, &mut spans);
                    }
                }
                "\"" => {
                    self.next_line();
                    if let Some(operand) = op.operands.get(2) {
                        self.show(operand, &mut spans);
                    }
                }
                _ => {}
            }
        }

        spans
    }

    fn move_line(&mut self, tx: f32, ty: f32) {
        self.line_matrix = Matrix::translation(tx, ty).then(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    fn next_line(&mut self) {
        self.move_line(0.0, -self.leading);
    }

    /// Decode a Tj string or TJ array, emit a span, and advance the text matrix.
    fn show(&mut self, operand: &PdfValue, spans: &mut Vec<TextSpan>) {
        if !self.in_text_block {
            return;
        }

        let mut text = String::new();
        // Advance in thousandths of text space, before font size scaling.
        let mut advance = 0.0f32;

        match operand {
            PdfValue::Str(bytes) => {
                let decoded = self.decode(bytes);
                advance += decoded.chars().count() as f32 * AVG_GLYPH_WIDTH * 1000.0;
                text.push_str(&decoded);
            }
            PdfValue::Array(items) => {
                for item in items {
                    match item {
                        PdfValue::Str(bytes) => {
                            let decoded = self.decode(bytes);
                            advance += decoded.chars().count() as f32 * AVG_GLYPH_WIDTH * 1000.0;
                            text.push_str(&decoded);
                        }
                        other => {
                            let Some(n) = other.as_number() else {
                                continue;
                            };
                            advance -= n;
                            // Negative values move right; large ones are word gaps.
                            if -n > TJ_SPACE_THRESHOLD && needs_space_after(&text) {
                                text.push(' ');
                            }
                        }
                    }
                }
            }
            _ => return,
        }

        let width_text_space = advance / 1000.0 * self.font_size * self.horizontal_scaling;
        let rendering = self.text_matrix.then(&self.ctm);

        // Whitespace-only shows produce no span.
        if !text.trim().is_empty() {
            spans.push(TextSpan {
                text,
                x: rendering.e,
                y: rendering.f,
                width: width_text_space * rendering.horizontal_scale(),
                font_size: self.font_size * rendering.vertical_scale(),
                font_name: self.font_name.clone(),
            });
        }

        self.text_matrix = Matrix::translation(width_text_space, 0.0).then(&self.text_matrix);
    }

    fn decode(&self, bytes: &[u8]) -> String {
        self.backend
            .decode_text(self.page, &self.font_resource, bytes)
    }
}

fn matrix_operand(op: &ContentOp) -> Matrix {
    Matrix::new(
        op.number(0, 1.0),
        op.number(1, 0.0),
        op.number(2, 0.0),
        op.number(3, 1.0),
        op.number(4, 0.0),
        op.number(5, 0.0),
    )
}

fn needs_space_after(text: &str) -> bool {
    match text.chars().last() {
        None => false,
        Some(c) => !c.is_whitespace() && !is_spaceless_script_char(c),
    }
}

/// Drop a six-letter subset tag such as `ABCDEF+` from a base font name.
pub fn strip_subset_prefix(name: &str) -> &str {
    match name.split_once('+') {
        Some((tag, rest))
            if tag.len() == 6 && tag.bytes().all(|b| b.is_ascii_uppercase()) && !rest.is_empty() =>
        {
            rest
        }
        _ => name,
    }
}
