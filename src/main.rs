mod catalog;
mod commands;
mod export;
mod opener;
mod outline;
mod parser;
mod session;
mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::export::ExportFormat;
use crate::session::Session;

#[derive(Parser)]
#[command(
    name = "osintree",
    about = "Browse a categorized catalog of OSINT links as a collapsible outline"
)]
struct Cli {
    /// Catalog file (`.json`, or the indented outline format); defaults to the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Configuration file (`key: value` lines)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Append diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive outline (default)
    View,
    /// Print the outline as text
    Print {
        /// Expand every group instead of showing the initial state
        #[arg(long)]
        all: bool,
    },
    /// Write the catalog as a static HTML page, or convert it to another catalog format
    Export {
        /// Destination file
        #[arg(long, short)]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,
    },
    /// Validate the catalog and print its counts
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = cli.log_file.as_deref() {
        init_tracing(path)?;
    }

    let session = Session::load(cli.catalog.as_deref(), cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::View) {
        Command::View => commands::view::run(session),
        Command::Print { all } => commands::print::run(&session, all),
        Command::Export { output, format } => commands::export::run(&session, &output, format),
        Command::Check => commands::check::run(&session),
    }
}

/// Route `tracing` events to a file; the terminal belongs to the outline view.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|err| anyhow!(err))?;
    Ok(())
}
