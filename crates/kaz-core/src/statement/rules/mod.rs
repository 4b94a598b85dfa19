//! Rule-based field extractors for bank statements.
//!
//! Each field has its own extractor with an explicitly documented selection
//! rule, so the fragile business of matching free text can be unit-tested
//! per rule.

pub mod dates;
pub mod iban;
pub mod patterns;

pub use dates::{PeriodExtractor, StatementPeriod, normalize_date};
pub use iban::{IbanExtractor, extract_iban};
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text, applying the extractor's selection rule.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidate occurrences, in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
