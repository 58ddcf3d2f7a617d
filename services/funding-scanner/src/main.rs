//! Fundtrace CLI
//!
//! Scans a folder tree of PDFs for research funding acknowledgments.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::info;

use fundtrace_utils::{init_logging, AppConfig, ReportFormat};

#[derive(Parser, Debug)]
#[command(name = "fundtrace")]
#[command(version, about = "Find funding acknowledgments in a folder of PDFs", long_about = None)]
struct Cli {
    /// Root folder to scan (overrides scan.root_folder)
    root: Option<PathBuf>,

    /// Additional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the per-file error log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Visit directory entries in file-name order
    #[arg(long)]
    sort: bool,

    /// Disable progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Log filter, e.g. "info" or "fundtrace_scanner=debug"
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    Text,
    Json,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(root) = self.root {
            config.scan.root_folder = Some(root);
        }
        if let Some(log_file) = self.log_file {
            config.scan.log_file_path = log_file;
        }
        if let Some(format) = self.format {
            config.report.format = match format {
                Format::Text => ReportFormat::Text,
                Format::Json => ReportFormat::Json,
            };
        }
        if self.sort {
            config.scan.sort_entries = true;
        }
        if self.quiet {
            config.scan.show_progress = false;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load_with(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);

    init_logging(&config.logging).context("Failed to initialize logging")?;
    info!("Starting fundtrace");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut notices = io::stderr();

    fundtrace_scanner::run(&config, &mut out, &mut notices).context("Funding scan failed")?;

    Ok(())
}
