//! Basename construction and the rename itself.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::RenameError;
use crate::statement::StatementFields;
use crate::statement::rules::RENAMED_STEM;

/// Result type for rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;

/// Build the new basename: start, end, IBAN, hyphen-joined, fixed order.
pub fn build_basename(fields: &StatementFields) -> String {
    format!("{}-{}-{}", fields.start_date, fields.end_date, fields.iban)
}

/// Whether a path already carries a basename this tool produced.
pub fn is_renamed(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| RENAMED_STEM.is_match(stem))
}

/// The path `source` would be renamed to: same directory, same extension,
/// stem replaced by `basename`.
pub fn target_path(source: &Path, basename: &str) -> Result<PathBuf> {
    if source.file_name().is_none() {
        return Err(RenameError::InvalidSource(source.to_path_buf()));
    }

    let mut file_name = String::from(basename);
    if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
        file_name.push('.');
        file_name.push_str(ext);
    }

    Ok(source.with_file_name(file_name))
}

/// Rename `source` so its stem becomes `basename`.
///
/// The rename is a single `std::fs::rename`, atomic within a filesystem:
/// afterwards the file carries either its original or its new name, never
/// an in-between state. An existing file at the target refuses the rename
/// and leaves the original untouched.
pub fn rename_to(source: &Path, basename: &str) -> Result<PathBuf> {
    let target = target_path(source, basename)?;

    if target.exists() {
        return Err(RenameError::TargetExists(target));
    }

    std::fs::rename(source, &target)?;
    info!(from = %source.display(), to = %target.display(), "renamed statement");
    Ok(target)
}
