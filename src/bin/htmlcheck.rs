//! CLI for checking an HTML document against a list of CSS selectors.
//!
//! Prints the selector -> presence mapping as pretty JSON (4-space indent)
//! on stdout and exits 0; all diagnostics go to stderr with exit code 1.
//! Validation lives in the library; this binary is the only place that
//! decides exit codes.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use htmlcheck::{check_file, check_url, CHECKS_FILE_DEFAULT, DEFAULT_TIMEOUT_SECS};

/// Check an HTML document for the presence of elements matching CSS selectors.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the checks file (a JSON array of CSS selector strings).
    #[arg(short, long, default_value = CHECKS_FILE_DEFAULT)]
    checks: PathBuf,

    /// Path to a local HTML file to check.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// URL of a remote HTML document to fetch and check.
    #[arg(short, long)]
    url: Option<String>,

    /// Timeout for the remote fetch, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

fn run(cli: &Cli) -> Result<String> {
    let report = if let Some(file) = &cli.file {
        check_file(file, &cli.checks)?
    } else if let Some(url) = &cli.url {
        check_url(url, &cli.checks, Duration::from_secs(cli.timeout))?
    } else {
        anyhow::bail!("No HTML file or URL specified.");
    };
    Ok(report.to_json_pretty()?)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
