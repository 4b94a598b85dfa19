//! Rename command - the check/extract/parse/rename pipeline for one file,
//! or for every PDF in a directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;
use tracing::info;

use kaz_core::{
    REQUIRED_TOOLS, StatementParser, TextExtractor, build_basename, is_renamed, rename_to,
    require_tools, target_path,
};

/// Options for the rename command.
pub struct Options {
    /// Report the would-be rename without performing it.
    pub dry_run: bool,
    /// Skip the PostScript route and convert with pdftotext only.
    pub pdftotext_only: bool,
}

/// Outcome of processing one statement file.
enum Outcome {
    Renamed(PathBuf),
    WouldRename(PathBuf),
    Skipped,
}

pub fn run(input: &Path, opts: &Options) -> anyhow::Result<()> {
    if input.is_dir() {
        run_directory(input, opts)
    } else {
        let outcome = process_file(input, opts)
            .with_context(|| format!("processing {}", input.display()))?;
        report(input, &outcome);
        Ok(())
    }
}

/// Process every `*.pdf` directly inside `dir`. Files are independent:
/// a failure is reported and the remaining files still run.
fn run_directory(dir: &Path, opts: &Options) -> anyhow::Result<()> {
    let pattern = dir.join("*.pdf");
    let pattern = pattern
        .to_str()
        .context("directory path is not valid UTF-8")?;

    let mut pdfs: Vec<PathBuf> = glob::glob(pattern)?.filter_map(|entry| entry.ok()).collect();
    pdfs.sort();

    if pdfs.is_empty() {
        anyhow::bail!("no PDF files found in {}", dir.display());
    }
    info!(count = pdfs.len(), "processing directory");

    let mut failures = 0usize;
    for pdf in &pdfs {
        match process_file(pdf, opts) {
            Ok(outcome) => report(pdf, &outcome),
            Err(err) => {
                failures += 1;
                eprintln!("{} {}: {err}", style("failed:").red(), pdf.display());
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) failed", pdfs.len());
    }
    Ok(())
}

/// The single-file pipeline: tool check (PDF input only), text extraction,
/// field parsing, basename build, rename.
fn process_file(input: &Path, opts: &Options) -> kaz_core::Result<Outcome> {
    if is_renamed(input) {
        info!(path = %input.display(), "already renamed, skipping");
        return Ok(Outcome::Skipped);
    }

    // Converters are only needed for PDF input; check before any subprocess
    // gets spawned.
    let needs_conversion = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    if needs_conversion {
        if opts.pdftotext_only {
            require_tools(&["pdftotext"])?;
        } else {
            require_tools(&REQUIRED_TOOLS)?;
        }
    }

    let extractor = TextExtractor::new().with_ps_route(!opts.pdftotext_only);
    let text = extractor.extract(input)?;
    let fields = StatementParser::new().parse(&text)?;
    let basename = build_basename(&fields);

    if opts.dry_run {
        return Ok(Outcome::WouldRename(target_path(input, &basename)?));
    }

    Ok(Outcome::Renamed(rename_to(input, &basename)?))
}

fn report(input: &Path, outcome: &Outcome) {
    match outcome {
        Outcome::Renamed(target) => println!(
            "{} {} -> {}",
            style("renamed").green().bold(),
            input.display(),
            target.display()
        ),
        Outcome::WouldRename(target) => println!(
            "{} {} -> {}",
            style("would rename").yellow(),
            input.display(),
            target.display()
        ),
        Outcome::Skipped => println!("{} {}", style("skipped").dim(), input.display()),
    }
}
