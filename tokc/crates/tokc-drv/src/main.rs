//! tokc - classify the lexemes of a source file, statement by statement.
//!
//! Usage: `tokc [OPTIONS] <inputFile> <outputFile>`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tokc_drv::{Config, DriverError, ReportFormat, Session};
use tokc_lex::OverflowPolicy;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// tokc - a statement-grouping token recognizer
///
/// Reads the input file line by line and writes one report line per
/// lexeme to the output file, grouped into `;`-terminated statements.
#[derive(Parser, Debug)]
#[command(name = "tokc")]
#[command(author = "Tokc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify the lexemes of a source file", long_about = None)]
struct Cli {
    /// Input file followed by output file
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "TOKC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TOKC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "TOKC_NO_COLOR")]
    no_color: bool,

    /// Report format
    #[arg(short = 'F', long, value_enum)]
    format: Option<ReportFormat>,

    /// Characters kept from each input line
    #[arg(long)]
    line_capacity: Option<usize>,

    /// Report overlong lexemes as lexical errors instead of truncating them
    #[arg(long)]
    reject_overflow: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version keep clap's own output and exit status.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Checks the paths, loads configuration, installs logging, and runs the
/// scan.
fn run(cli: Cli) -> anyhow::Result<()> {
    let (input, output, ignored) = io_paths(&cli.paths)?;

    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&cli, &mut config);
    config.validate()?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    if ignored > 0 {
        debug!(ignored, "ignoring extra paths");
    }

    Session::new(config).run_paths(input, output)?;
    Ok(())
}

/// Splits the positional paths into input and output, counting any extras.
fn io_paths(paths: &[PathBuf]) -> tokc_drv::Result<(&Path, &Path, usize)> {
    match paths {
        [input, output, rest @ ..] => Ok((input.as_path(), output.as_path(), rest.len())),
        _ => Err(DriverError::Usage),
    }
}

/// Initialize the logging system.
///
/// Events go to stderr so they never mix with a report. `RUST_LOG`
/// overrides the default level.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> tokc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Command-line flags take precedence over the configuration file.
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Some(capacity) = cli.line_capacity {
        config.scan.line_capacity = capacity;
    }
    if cli.reject_overflow {
        config.scan.overflow = OverflowPolicy::Reject;
    }
}
