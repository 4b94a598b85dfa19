//! CLI for renaming bank statement files by statement period and IBAN.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use kaz_core::KazError;

/// Rename bank statement files to <start>-<end>-<IBAN> after their content
#[derive(Parser)]
#[command(name = "rename_kaz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statement file (PDF or text), or a directory of PDFs
    #[arg(required_unless_present = "check_tools")]
    input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Check the external PDF toolchain and exit
    #[arg(long)]
    check_tools: bool,

    /// Show what would be renamed without touching the filesystem
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Skip the PostScript route and convert with pdftotext only
    #[arg(long)]
    pdftotext_only: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("{} {err}", style("error:").red().bold());
        return ExitCode::FAILURE;
    }

    let result = if cli.check_tools {
        commands::check::run()
    } else if let Some(input) = &cli.input {
        let opts = commands::rename::Options {
            dry_run: cli.dry_run,
            pdftotext_only: cli.pdftotext_only,
        };
        commands::rename::run(input, &opts)
    } else {
        // clap enforces the positional unless --check-tools is given
        Err(anyhow::anyhow!("missing input path"))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Distinct exit codes per failure class, so calling scripts can tell a
/// missing tool from a failed conversion or a refused rename.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<KazError>() {
        Some(KazError::Tool(_)) => 2,
        Some(KazError::Convert(_)) => 3,
        Some(KazError::Field(_)) => 4,
        Some(KazError::Rename(_)) => 5,
        _ => 1,
    }
}
