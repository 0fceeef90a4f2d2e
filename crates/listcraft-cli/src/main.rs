mod config;
mod registry;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use listcraft_core::{Error as CoreError, MissingFieldPolicy};
use listcraft_generate::{BatchError, BatchProcessor, REQUIRED_COLUMNS};
use registry::{init_logging, write_report};
use thiserror::Error;

use crate::config::load_config;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[derive(Parser, Debug)]
#[command(name = "listcraft", version, about = "Marketplace listing content generator")]
struct Cli {
    /// Config file (defaults to ./listcraft.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate listing content for every row of a CSV file.
    Generate(GenerateArgs),
    /// Report banned terms found in a text and show it cleaned.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Input CSV with product attributes.
    #[arg(value_name = "INPUT", default_value = "products_input.csv")]
    input: PathBuf,
    /// Output CSV path.
    #[arg(long, default_value = "products_output.csv")]
    out: PathBuf,
    /// Write a JSON run report.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Flag rows with missing fields instead of failing the batch.
    #[arg(long, default_value_t = false)]
    skip_missing: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Text to check.
    text: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.log_file.as_deref())?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(args, config),
        Command::Check(args) => run_check(args, config),
    }
}

fn run_generate(
    args: GenerateArgs,
    mut config: listcraft_core::ContentConfig,
) -> Result<(), CliError> {
    if args.skip_missing {
        config.batch.on_missing_field = MissingFieldPolicy::SkipRow;
    }

    let processor = BatchProcessor::from_config(&config)?;
    let result = match processor.process_csv(&args.input, &args.out) {
        Ok(result) => result,
        Err(BatchError::InputNotFound(path)) => {
            eprintln!("Error: Input file '{}' not found.", path.display());
            eprintln!(
                "Please create an input CSV with columns: {}, current_bullets",
                REQUIRED_COLUMNS.join(", ")
            );
            return Err(BatchError::InputNotFound(path).into());
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(path) = &args.report {
        write_report(path, &result.report)?;
        tracing::info!(path = %path.display(), "report written");
    }

    let report = &result.report;
    println!("Generated content saved to {}", args.out.display());
    println!();
    println!("Processed {} products", report.rows_read);
    let flagged = report.rows_with_violations + report.rows_skipped;
    if flagged > 0 {
        println!("{flagged} products have violations");
    } else {
        println!("All products meet requirements");
    }

    Ok(())
}

fn run_check(args: CheckArgs, config: listcraft_core::ContentConfig) -> Result<(), CliError> {
    let policy = config.policy.build_filter()?;
    let found = policy.detect(&args.text);
    if found.is_empty() {
        println!("banned terms: none");
    } else {
        println!("banned terms: {}", found.join(", "));
    }
    println!("cleaned: {}", policy.strip(&args.text));
    Ok(())
}
