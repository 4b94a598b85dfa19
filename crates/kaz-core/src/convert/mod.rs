//! Conversion of statement files to plain text.

mod extractor;

pub use extractor::TextExtractor;

use crate::error::ConvertError;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
