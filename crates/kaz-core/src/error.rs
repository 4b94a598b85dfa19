//! Error types for the kaz-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the kaz library.
#[derive(Error, Debug)]
pub enum KazError {
    /// Required external tool is not available.
    #[error("tool error: {0}")]
    Tool(#[from] ToolError),

    /// Text conversion error.
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Field(#[from] FieldError),

    /// File rename error.
    #[error("rename error: {0}")]
    Rename(#[from] RenameError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the tool availability check.
#[derive(Error, Debug)]
pub enum ToolError {
    /// One or more required executables are absent from the search path.
    #[error("required tool(s) not found on PATH: {}", .0.join(", "))]
    Missing(Vec<String>),
}

/// Errors from converting a statement file to text.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input file does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// An external converter exited with a non-zero status.
    #[error("{tool} failed: {status}")]
    Failed {
        tool: &'static str,
        status: std::process::ExitStatus,
    },

    /// A converter succeeded but produced no text.
    #[error("{0} produced empty output")]
    EmptyOutput(&'static str),

    /// Failed to spawn or read from a converter process.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading input or intermediates.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from statement field extraction.
#[derive(Error, Debug)]
pub enum FieldError {
    /// Required field(s) could not be located in the text.
    #[error("field(s) not found in statement text: {}", .0.join(", "))]
    NotFound(Vec<String>),
}

/// Errors from renaming the statement file.
#[derive(Error, Debug)]
pub enum RenameError {
    /// A file with the target name already exists; the original is untouched.
    #[error("target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    /// The source path has no file name component.
    #[error("invalid source path: {}", .0.display())]
    InvalidSource(PathBuf),

    /// The filesystem refused the rename (permissions etc.).
    #[error("rename failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the kaz library.
pub type Result<T> = std::result::Result<T, KazError>;
