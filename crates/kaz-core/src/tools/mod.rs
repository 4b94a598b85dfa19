//! Availability checks for the external PDF toolchain.
//!
//! The converters are opaque subprocesses; all we need to know up front is
//! whether they can be found on the executable search path. The check is a
//! pure function over the tool names and a `PATH` value so it can be tested
//! without touching the real environment.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

use crate::error::ToolError;

/// External executables needed to turn a PDF statement into text.
pub const REQUIRED_TOOLS: [&str; 4] = ["pdftotext", "pdftk", "ps2ascii", "pdf2ps"];

/// Presence of a single tool on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    /// Executable name.
    pub name: String,
    /// Whether it was found.
    pub found: bool,
}

/// Check each named tool against the given `PATH` value.
///
/// A tool counts as present when some directory in the search path contains
/// a regular file of that name with the executable bit set.
pub fn check_tools<S: AsRef<str>>(names: &[S], search_path: &OsStr) -> Vec<ToolStatus> {
    let dirs: Vec<_> = std::env::split_paths(search_path).collect();

    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let found = dirs.iter().any(|dir| is_executable(&dir.join(name)));
            debug!(tool = name, found, "tool check");
            ToolStatus {
                name: name.to_string(),
                found,
            }
        })
        .collect()
}

/// Check the named tools against the current process `PATH`.
pub fn check_tools_on_path<S: AsRef<str>>(names: &[S]) -> Vec<ToolStatus> {
    let path = std::env::var_os("PATH").unwrap_or_default();
    check_tools(names, &path)
}

/// Require that every named tool is present, or fail with
/// [`ToolError::Missing`] listing each absent one.
pub fn require_tools<S: AsRef<str>>(names: &[S]) -> Result<(), ToolError> {
    let missing: Vec<String> = check_tools_on_path(names)
        .into_iter()
        .filter(|s| !s.found)
        .map(|s| s.name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ToolError::Missing(missing))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn test_finds_executable_on_path() {
        let dir = tempfile::tempdir().unwrap();
        make_executable(dir.path(), "pdftotext");

        let path = std::env::join_paths([dir.path()]).unwrap();
        let statuses = check_tools(&["pdftotext", "pdftk"], &path);

        assert_eq!(
            statuses,
            vec![
                ToolStatus {
                    name: "pdftotext".to_string(),
                    found: true
                },
                ToolStatus {
                    name: "pdftk".to_string(),
                    found: false
                },
            ]
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_non_executable_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pdf2ps"), "not a binary").unwrap();

        let path = std::env::join_paths([dir.path()]).unwrap();
        let statuses = check_tools(&["pdf2ps"], &path);
        assert!(!statuses[0].found);
    }

    #[test]
    fn test_empty_path_finds_nothing() {
        let statuses = check_tools(&REQUIRED_TOOLS, OsStr::new(""));
        assert!(statuses.iter().all(|s| !s.found));
    }
}
