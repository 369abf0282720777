//! Extract command - pull the result fields out of a single document.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;
use tracing::{debug, info};

use elex_core::extract::ExtractionDetail;
use elex_core::{build_provider, render_csv, ElectoralExtractor};

use super::{load_config, ProviderArg};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input document (PDF, or a .txt file holding already-recognized text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Source of document text
    #[arg(short, long, value_enum, default_value = "auto")]
    provider: ProviderArg,

    /// Show which rule matched each field and which candidates it outranked
    #[arg(long)]
    explain: bool,

    /// Warn about inconsistent counts (NOTA > valid votes > electors)
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let is_text = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    info!("Processing file: {}", args.input.display());

    let text = if is_text {
        fs::read_to_string(&args.input)?
    } else {
        let config = load_config(config_path)?;
        let provider = build_provider(args.provider.into(), &config)?;
        debug!("Using {} text provider", provider.name());
        provider.get_text(&args.input).await?
    };

    if text.is_empty() {
        anyhow::bail!("No text could be extracted from {}", args.input.display());
    }

    let source_id = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extractor = ElectoralExtractor::new();
    let detail = if args.explain {
        extractor.explain(&text, &source_id)
    } else {
        extractor.extract_detailed(&text, &source_id)
    };

    if args.check {
        for issue in detail.record.consistency_issues() {
            eprintln!("{} {}", style("!").yellow(), issue);
        }
    }

    let output = format_detail(&detail, args.format, args.explain)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn format_detail(
    detail: &ExtractionDetail,
    format: OutputFormat,
    explain: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if explain => Ok(serde_json::to_string_pretty(detail)? + "\n"),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&detail.record)? + "\n"),
        OutputFormat::Csv => Ok(render_csv(std::slice::from_ref(&detail.record))?),
        OutputFormat::Text => Ok(format_text(detail, explain)),
    }
}

fn format_text(detail: &ExtractionDetail, explain: bool) -> String {
    let mut output = String::new();

    for (header, value) in elex_core::ExtractionRecord::HEADERS
        .iter()
        .zip(detail.record.row())
    {
        output.push_str(&format!("{}: {}\n", header, value));
    }

    if explain {
        output.push('\n');
        for m in &detail.matches {
            output.push_str(&format!(
                "{} <- rule {} matched {:?} at {}..{}\n",
                m.field, m.rule, m.source, m.position.0, m.position.1
            ));
        }
        for field in &detail.missing {
            output.push_str(&format!("{} <- no rule matched\n", field));
        }
        for m in &detail.outranked {
            output.push_str(&format!(
                "{} <- rule {} also matched {:?} (outranked)\n",
                m.field, m.rule, m.source
            ));
        }
    }

    output
}
