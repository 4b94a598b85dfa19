//! Statement field extraction module.

mod parser;
pub mod rules;

pub use parser::{StatementFields, StatementParser};

use crate::error::FieldError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, FieldError>;
