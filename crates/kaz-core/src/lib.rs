//! Core library for bank statement renaming.
//!
//! This crate provides:
//! - availability checks for the external PDF toolchain
//! - text extraction through pdftk/pdf2ps/ps2ascii with a pdftotext fallback
//! - rule-based extraction of the statement period and IBAN
//! - basename construction and the atomic rename

pub mod convert;
pub mod error;
pub mod rename;
pub mod statement;
pub mod tools;

pub use convert::TextExtractor;
pub use error::{ConvertError, FieldError, KazError, RenameError, Result, ToolError};
pub use rename::{build_basename, is_renamed, rename_to, target_path};
pub use statement::{StatementFields, StatementParser};
pub use tools::{REQUIRED_TOOLS, ToolStatus, check_tools, require_tools};
