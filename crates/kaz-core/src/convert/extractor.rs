//! Text extraction via the external PDF toolchain.
//!
//! A statement arrives either as plain text or as a PDF. Text files are read
//! directly. PDFs go through external converters, first page only, with two
//! routes: pdftk/pdf2ps/ps2ascii as the primary, `pdftotext` as the fallback
//! for documents the PostScript route renders empty.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;
use tracing::{debug, warn};

use super::Result;
use crate::error::ConvertError;

/// Extracts the text content of a statement file.
pub struct TextExtractor {
    /// Whether to try the PostScript route before `pdftotext`.
    ps_route: bool,
}

impl TextExtractor {
    /// Create an extractor with the default route order.
    pub fn new() -> Self {
        Self { ps_route: true }
    }

    /// Set whether the PostScript route is attempted first.
    pub fn with_ps_route(mut self, ps_route: bool) -> Self {
        self.ps_route = ps_route;
        self
    }

    /// Produce the full text of the given statement file.
    ///
    /// Non-PDF input is read as text directly (lossy UTF-8). PDF input is
    /// converted through the external toolchain; intermediates live in a
    /// temporary directory removed when conversion finishes.
    pub fn extract(&self, input: &Path) -> Result<String> {
        if !input.exists() {
            return Err(ConvertError::InputNotFound(input.to_path_buf()));
        }

        if !is_pdf(input) {
            debug!(path = %input.display(), "reading input as plain text");
            let bytes = std::fs::read(input)?;
            return Ok(String::from_utf8_lossy(&bytes).into_owned());
        }

        let workdir = TempDir::new()?;

        if self.ps_route {
            match self.via_postscript(input, workdir.path()) {
                Ok(text) => return Ok(text),
                Err(err) => {
                    warn!(%err, "PostScript route failed, falling back to pdftotext");
                }
            }
        }

        self.via_pdftotext(input)
    }

    /// pdftk (first page) -> pdf2ps -> ps2ascii, text captured from stdout.
    fn via_postscript(&self, input: &Path, workdir: &Path) -> Result<String> {
        let first_page = workdir.join("first_page.pdf");
        let ps_file = workdir.join("first_page.ps");

        run_converter(
            "pdftk",
            Command::new("pdftk")
                .arg(input)
                .args(["cat", "1", "output"])
                .arg(&first_page),
        )?;

        run_converter(
            "pdf2ps",
            Command::new("pdf2ps").arg(&first_page).arg(&ps_file),
        )?;

        let output = run_converter("ps2ascii", Command::new("ps2ascii").arg(&ps_file))?;
        text_from_stdout("ps2ascii", output)
    }

    /// pdftotext on the first page, writing to stdout via the `-` convention.
    fn via_pdftotext(&self, input: &Path) -> Result<String> {
        let output = run_converter(
            "pdftotext",
            Command::new("pdftotext")
                .args(["-f", "1", "-l", "1"])
                .arg(input)
                .arg("-"),
        )?;
        text_from_stdout("pdftotext", output)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Run a converter, treating spawn failure and non-zero exit as errors.
fn run_converter(tool: &'static str, command: &mut Command) -> Result<Output> {
    debug!(tool, "invoking converter");

    let output = command
        .output()
        .map_err(|source| ConvertError::Spawn { tool, source })?;

    if !output.status.success() {
        return Err(ConvertError::Failed {
            tool,
            status: output.status,
        });
    }

    Ok(output)
}

fn text_from_stdout(tool: &'static str, output: Output) -> Result<String> {
    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    if text.trim().is_empty() {
        return Err(ConvertError::EmptyOutput(tool));
    }
    Ok(text)
}
