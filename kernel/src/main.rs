//! `tandem` - line diff and three-way merge from the command line.
//!
//! Exit status is 0 when inputs are identical or a merge is clean, 1 when
//! differences or conflicts are reported, and 2 on errors.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tandem_kernel::commands::{DiffCommand, GitCommand, MergeCommand, Outcome, ReportCommand};
use tandem_kernel::infrastructure::{config::Settings, telemetry::TelemetryBuilder};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "tandem", version, about = "Line diff and three-way merge")]
struct Cli {
    /// Configuration file (defaults to ./tandem.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two files
    Diff(DiffCommand),
    /// Write an HTML comparison report
    Report(ReportCommand),
    /// Merge two derivatives of a common base
    Merge(MergeCommand),
    /// Run as a git difftool or mergetool
    Git(GitCommand),
}

const ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("tandem: {e:#}");
            ExitCode::from(ERROR_EXIT)
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut telemetry = TelemetryBuilder::new("tandem", env!("CARGO_PKG_VERSION"))
        .with_settings(&settings.telemetry);
    if cli.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    telemetry.init().context("Failed to initialize telemetry")?;

    debug!(command = ?cli.command, "Tandem starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = match &cli.command {
        Commands::Diff(cmd) => cmd.execute(&settings, &mut out).context("diff failed")?,
        Commands::Report(cmd) => cmd.execute(&settings, &mut out).context("report failed")?,
        Commands::Merge(cmd) => cmd.execute(&settings, &mut out).context("merge failed")?,
        Commands::Git(cmd) => cmd.execute(&settings, &mut out).context("git tool failed")?,
    };

    Ok(outcome)
}
