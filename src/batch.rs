//! Directory batch processing.
//!
//! Every `.pdf` file in an input directory becomes `<stem>.json` in an
//! output directory. Documents are independent, so a failure in one never
//! stops the others: a document that cannot be opened still gets a
//! placeholder result written for it.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::{extract_outline, OutlineOptions};
use crate::detect::has_pdf_extension;
use crate::error::Result;
use crate::model::ExtractionResult;
use crate::parser::{ParseOptions, PdfParser};
use crate::render::{to_json, JsonFormat};

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// How each document is decoded
    pub parse: ParseOptions,

    /// How titles and outlines are inferred
    pub outline: OutlineOptions,

    /// Output JSON layout
    pub format: JsonFormat,

    /// Whether documents are processed on the rayon pool
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            outline: OutlineOptions::default(),
            format: JsonFormat::Pretty,
            parallel: true,
        }
    }
}

impl BatchOptions {
    /// Create batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse options.
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Set the outline options.
    pub fn with_outline_options(mut self, outline: OutlineOptions) -> Self {
        self.outline = outline;
        self
    }

    /// Keep going past pages that fail to decode.
    pub fn lenient(mut self) -> Self {
        self.parse = self.parse.lenient();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Process documents one at a time.
    pub fn sequential(self) -> Self {
        self.with_parallel(false)
    }
}

/// Outcome for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Title and outline written
    Ok,
    /// The document could not be decoded; the placeholder was written
    OpenFailed(String),
    /// The result could not be written
    WriteFailed(String),
}

/// Report for one input file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Input PDF path
    pub input: PathBuf,
    /// Output JSON path
    pub output: PathBuf,
    /// What happened
    pub status: FileStatus,
    /// Number of outline entries written
    pub heading_count: usize,
}

impl FileReport {
    /// Check if the document was processed and written.
    pub fn is_ok(&self) -> bool {
        self.status == FileStatus::Ok
    }
}

/// Report for a whole batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One report per input file
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Number of input files seen.
    pub fn processed(&self) -> usize {
        self.files.len()
    }

    /// Number of files processed and written without error.
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_ok()).count()
    }

    /// Number of files that could not be decoded.
    pub fn open_failures(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::OpenFailed(_)))
    }

    /// Number of files whose output could not be written.
    pub fn write_failures(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::WriteFailed(_)))
    }

    /// Check if the batch saw no input files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.status)).count()
    }
}

/// Runs the outline pipeline over a directory of PDFs.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    options: BatchOptions,
}

impl BatchProcessor {
    /// Create a processor.
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Process every PDF in `input_dir`, writing results to `output_dir`.
    ///
    /// Fails only if the input directory cannot be read or the output
    /// directory cannot be created.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        self.run_with_progress(input_dir, output_dir, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_file` as each file finishes.
    ///
    /// With parallel processing the callback may run on several threads
    /// and in any order; the returned report is always in input order.
    pub fn run_with_progress<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        on_file: F,
    ) -> Result<BatchReport>
    where
        F: Fn(&FileReport) + Sync,
    {
        let inputs = list_pdf_files(input_dir)?;
        fs::create_dir_all(output_dir)?;

        if inputs.is_empty() {
            log::info!("No PDF files found in the input directory.");
            return Ok(BatchReport::default());
        }
        log::info!(
            "Processing {} PDF files from {}",
            inputs.len(),
            input_dir.display()
        );

        let process = |input: &PathBuf| {
            let report = self.process_file(input, output_dir);
            on_file(&report);
            report
        };

        let files: Vec<FileReport> = if self.options.parallel {
            inputs.par_iter().map(process).collect()
        } else {
            inputs.iter().map(process).collect()
        };

        Ok(BatchReport { files })
    }

    /// Decode, analyse and write one document.
    pub fn process_file(&self, input: &Path, output_dir: &Path) -> FileReport {
        let output = output_path(input, output_dir);

        let (result, mut status) = match self.extract(input) {
            Ok(result) => (result, FileStatus::Ok),
            Err(e) => {
                log::warn!("Error processing {}: {}", input.display(), e);
                (ExtractionResult::open_error(), FileStatus::OpenFailed(e.to_string()))
            }
        };

        if let Err(e) = self.write(&result, &output) {
            log::warn!("Failed to write {}: {}", output.display(), e);
            status = FileStatus::WriteFailed(e.to_string());
        } else {
            log::info!("Processed {}", input.display());
        }

        FileReport {
            input: input.to_path_buf(),
            output,
            status,
            heading_count: result.outline.len(),
        }
    }

    fn extract(&self, input: &Path) -> Result<ExtractionResult> {
        let doc = PdfParser::open_with_options(input, self.options.parse.clone())?.parse()?;
        Ok(extract_outline(&doc, &self.options.outline))
    }

    fn write(&self, result: &ExtractionResult, output: &Path) -> Result<()> {
        let json = to_json(result, self.options.format)?;
        fs::write(output, json)?;
        Ok(())
    }
}

/// Regular `.pdf` files directly inside `dir`, ordered by file name.
pub fn list_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_pdf_extension(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// `<output_dir>/<stem>.json` for an input file.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".json");
    output_dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path() {
        let out = Path::new("/out");
        assert_eq!(
            output_path(Path::new("/in/report.pdf"), out),
            PathBuf::from("/out/report.json")
        );
        assert_eq!(
            output_path(Path::new("/in/Scan.Final.PDF"), out),
            PathBuf::from("/out/Scan.Final.json")
        );
    }

    #[test]
    fn test_list_pdf_files_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b.pdf", "a.PDF", "notes.txt", "c.pdf.bak"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("folder.pdf")).unwrap();

        let names: Vec<String> = list_pdf_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }

    #[test]
    fn test_missing_input_dir_is_batch_error() {
        let dir = TempDir::new().unwrap();
        let result = BatchProcessor::default().run(&dir.path().join("missing"), dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input_creates_output_dir() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let out_dir = output.path().join("nested").join("out");

        let report = BatchProcessor::default().run(input.path(), &out_dir).unwrap();
        assert!(report.is_empty());
        assert!(out_dir.is_dir());
    }

    #[test]
    fn test_unopenable_file_gets_placeholder() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("broken.pdf"), b"this is not a pdf").unwrap();

        let processor = BatchProcessor::new(BatchOptions::new().sequential());
        let report = processor.run(input.path(), output.path()).unwrap();

        assert_eq!(report.processed(), 1);
        assert_eq!(report.open_failures(), 1);
        assert_eq!(report.succeeded(), 0);

        let written = fs::read_to_string(output.path().join("broken.json")).unwrap();
        assert_eq!(
            written,
            "{\n    \"title\": \"Error opening file\",\n    \"outline\": []\n}"
        );
    }

    #[test]
    fn test_batch_options_builder() {
        let options = BatchOptions::new()
            .lenient()
            .sequential()
            .with_format(JsonFormat::Compact)
            .with_outline_options(OutlineOptions::new().with_max_levels(2));

        assert!(!options.parallel);
        assert_eq!(options.format, JsonFormat::Compact);
        assert_eq!(options.parse.error_mode, crate::parser::ErrorMode::Lenient);
        assert_eq!(options.outline.max_levels, 2);
    }
}
