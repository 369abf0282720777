//! Batch command - extract every report in a directory into one table.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use elex_core::batch::Progress;
use elex_core::{
    build_provider, BatchOutcome, BatchProcessor, BatchReport, ElectoralExtractor, ExportFormat,
    ExportOutcome, TabularExporter,
};

use super::{load_config, ProviderArg};

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Directory containing the PDF reports
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output table (format follows the extension unless --format is given)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output table format
    #[arg(short, long, value_enum)]
    format: Option<TableFormat>,

    /// Source of document text
    #[arg(short, long, value_enum, default_value = "auto")]
    provider: ProviderArg,

    /// Warn about inconsistent counts (NOTA > valid votes > electors)
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TableFormat {
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl From<TableFormat> for ExportFormat {
    fn from(format: TableFormat) -> Self {
        match format {
            TableFormat::Csv => ExportFormat::Csv,
            TableFormat::Json => ExportFormat::Json,
        }
    }
}

pub async fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(input) = args.input {
        config.paths.input_dir = input;
    }
    let output_path = args.output.unwrap_or_else(|| config.output_path());
    let exporter = match args.format {
        Some(format) => TabularExporter::new(&output_path, format.into()),
        None => TabularExporter::for_path(&output_path),
    };

    println!(
        "{} Looking for .{} files in {}",
        style("ℹ").blue(),
        config.extraction.document_extension,
        config.paths.input_dir.display()
    );
    println!(
        "{} Output will be saved to {}",
        style("ℹ").blue(),
        output_path.display()
    );

    let provider = build_provider(args.provider.into(), &config)?;
    let processor = BatchProcessor::new(provider, ElectoralExtractor::new())
        .with_extension(&config.extraction.document_extension);
    debug!("Using {} text provider", processor.provider_name());

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )?
            .progress_chars("=>-"),
    );

    let outcome = processor
        .process_all_with_progress(&config.paths.input_dir, |progress| match progress {
            Progress::Discovered(total) => pb.set_length(total as u64),
            Progress::Processed { path, .. } => {
                pb.set_message(
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                );
                pb.inc(1);
            }
        })
        .await;

    let report = match outcome {
        BatchOutcome::MissingDirectory(dir) => {
            pb.finish_and_clear();
            println!(
                "{} Input directory '{}' not found. Nothing to do.",
                style("!").yellow(),
                dir.display()
            );
            return Ok(());
        }
        BatchOutcome::NoDocuments(dir) => {
            pb.finish_and_clear();
            println!(
                "{} No .{} files found in '{}'. Nothing to do.",
                style("!").yellow(),
                config.extraction.document_extension,
                dir.display()
            );
            return Ok(());
        }
        BatchOutcome::Completed(report) => {
            pb.finish_with_message("Complete");
            report
        }
    };

    if args.check {
        print_consistency_issues(&report);
    }

    match exporter.export(&report.records)? {
        ExportOutcome::Written { path, rows } => {
            println!(
                "{} Data saved to {} ({} rows)",
                style("✓").green(),
                path.display(),
                rows
            );
        }
        ExportOutcome::Skipped => {
            println!(
                "{} No data was extracted. Check the input files and provider configuration.",
                style("!").yellow()
            );
        }
    }

    print_summary(&report);
    println!();
    println!("{} Finished in {:?}", style("✓").green(), start.elapsed());

    Ok(())
}

fn print_consistency_issues(report: &BatchReport) {
    for record in &report.records {
        for issue in record.consistency_issues() {
            eprintln!(
                "{} {}: {}",
                style("!").yellow(),
                record.source_identifier,
                issue
            );
        }
    }
}

fn print_summary(report: &BatchReport) {
    println!();
    println!("{}", style("Extraction summary").bold());
    println!("   Files found:            {}", report.discovered);
    println!("   Files processed:        {}", style(report.processed()).green());
    println!("   Successful extractions: {}", report.with_data());
    println!("   Failed:                 {}", style(report.failed()).red());

    if !report.failures.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failure in &report.failures {
            println!("  - {}: {}", failure.path.display(), failure.reason);
        }
    }

    if let Some(sample) = report.records.first() {
        println!();
        println!("{}", style("Sample record").bold());
        for (header, value) in elex_core::ExtractionRecord::HEADERS.iter().zip(sample.row()) {
            println!("   {}: {}", header, value);
        }
    }
}
