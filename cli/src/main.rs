//! pdf-outline CLI - infer PDF titles and heading outlines as JSON

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf_outline::batch::{list_pdf_files, BatchOptions, BatchProcessor, FileStatus};
use pdf_outline::{
    render, Extractor, HeadingLevel, JsonFormat, OutlineOptions, ParseOptions, PdfParser,
    StyleAnalysis,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "pdf-outline")]
#[command(version)]
#[command(about = "Infer PDF titles and H1-H3 outlines from typography", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    batch: BatchArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every PDF in a directory into <stem>.json files
    Batch(BatchArgs),

    /// Infer the outline of one PDF
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        outline: OutlineArgs,
    },

    /// Show the style catalog and classification for one PDF
    Styles {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Lines with more tokens than this are not headings
        #[arg(long, default_value_t = pdf_outline::analysis::DEFAULT_MAX_HEADING_TOKENS)]
        max_tokens: usize,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct BatchArgs {
    /// Directory holding the input PDFs
    #[arg(value_name = "INPUT", env = "PDF_OUTLINE_INPUT", default_value = "/app/input")]
    input: PathBuf,

    /// Directory the JSON results are written to
    #[arg(value_name = "OUTPUT", env = "PDF_OUTLINE_OUTPUT", default_value = "/app/output")]
    output: PathBuf,

    /// Process documents one at a time
    #[arg(long)]
    sequential: bool,

    #[command(flatten)]
    outline: OutlineArgs,
}

#[derive(Args)]
struct OutlineArgs {
    /// Keep pages that fail to decode as empty pages instead of failing the document
    #[arg(long)]
    lenient: bool,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Lines with more tokens than this are not headings
    #[arg(long, default_value_t = pdf_outline::analysis::DEFAULT_MAX_HEADING_TOKENS)]
    max_tokens: usize,
}

impl OutlineArgs {
    fn parse_options(&self) -> ParseOptions {
        if self.lenient {
            ParseOptions::new().lenient()
        } else {
            ParseOptions::new()
        }
    }

    fn outline_options(&self) -> OutlineOptions {
        OutlineOptions::new().with_max_heading_tokens(self.max_tokens)
    }

    fn format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch(args)) => cmd_batch(&args),
        Some(Commands::Extract {
            input,
            output,
            outline,
        }) => cmd_extract(&input, output.as_deref(), &outline),
        Some(Commands::Styles { input, max_tokens }) => cmd_styles(&input, max_tokens),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Default behavior: batch over INPUT/OUTPUT (or their defaults)
        None => cmd_batch(&cli.batch),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_batch(args: &BatchArgs) -> CliResult {
    let options = BatchOptions::new()
        .with_parse_options(args.outline.parse_options())
        .with_outline_options(args.outline.outline_options())
        .with_format(args.outline.format())
        .with_parallel(!args.sequential);

    let total = list_pdf_files(&args.input)?.len();
    if total == 0 {
        println!("{}", "No PDF files found in the input directory.".yellow());
        fs::create_dir_all(&args.output)?;
        return Ok(());
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = BatchProcessor::new(options).run_with_progress(&args.input, &args.output, |file| {
        if let Some(name) = file.input.file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        pb.inc(1);
    })?;
    pb.finish_with_message("Done!");

    println!("\n{}", "Results:".green().bold());
    for file in &report.files {
        let name = file.input.display();
        match &file.status {
            FileStatus::Ok => println!(
                "  {} {} ({} headings)",
                "✓".green(),
                name,
                file.heading_count
            ),
            FileStatus::OpenFailed(e) => println!("  {} {}: {}", "✗".yellow(), name, e),
            FileStatus::WriteFailed(e) => println!("  {} {}: {}", "✗".red(), name, e),
        }
    }

    println!(
        "\n{} {} of {} documents processed into {}",
        "Done!".green().bold(),
        report.succeeded(),
        report.processed(),
        args.output.display()
    );
    if report.open_failures() > 0 {
        println!(
            "{} {} could not be opened; placeholders written",
            "Note:".yellow(),
            report.open_failures()
        );
    }

    Ok(())
}

fn cmd_extract(input: &Path, output: Option<&Path>, args: &OutlineArgs) -> CliResult {
    let result = Extractor::new()
        .with_parse_options(args.parse_options())
        .with_outline_options(args.outline_options())
        .parse(input)?;
    let json = render::to_json(&result, args.format())?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
        println!(
            "  {} H1, {} H2, {} H3",
            result.count_level(HeadingLevel::H1),
            result.count_level(HeadingLevel::H2),
            result.count_level(HeadingLevel::H3)
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_styles(input: &Path, max_tokens: usize) -> CliResult {
    // Lenient: show what decodes even if some pages fail
    let doc = PdfParser::open_with_options(input, ParseOptions::new().lenient())?.parse()?;
    let options = OutlineOptions::new().with_max_heading_tokens(max_tokens);
    let analysis = StyleAnalysis::of(&doc, &options);
    let classification = &analysis.classification;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), doc.metadata.pdf_version);
    println!("{}: {}", "Pages".bold(), doc.metadata.page_count);
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Info title".bold(), title);
    }
    if let Some(ref producer) = doc.metadata.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }

    println!("\n{}", "Styles".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (style, count) in analysis.catalog.iter() {
        let mut role = Vec::new();
        if classification.body_style.as_ref() == Some(style) {
            role.push("body".to_string());
        }
        if let Some(level) = classification.heading_levels.level_of(style) {
            role.push(level.to_string());
        }
        if classification.title_style.as_ref() == Some(style) {
            role.push("title".to_string());
        }
        println!(
            "  {:>6}  {:<40} {}",
            count,
            style.to_string(),
            role.join(", ").green()
        );
    }

    let result = analysis.extract(&doc, &options);
    println!("\n{}", "Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Title".bold(), result.title);
    for entry in &result.outline {
        println!("  {} {} {}", entry.level, entry.text, format!("(p. {})", entry.page).dimmed());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdf-outline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("  Typographic title and outline inference for PDF documents");
}
