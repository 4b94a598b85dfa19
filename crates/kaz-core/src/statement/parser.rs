//! Statement parser combining the per-field extractors.

use tracing::debug;

use super::rules::{FieldExtractor, IbanExtractor, PeriodExtractor};
use super::Result;
use crate::error::FieldError;

/// Fields extracted from one statement, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFields {
    /// Period start, `YYMMDD`.
    pub start_date: String,
    /// Period end, `YYMMDD`.
    pub end_date: String,
    /// IBAN with spaces stripped.
    pub iban: String,
}

/// Parser locating the statement period and IBAN in extracted text.
pub struct StatementParser {
    period: PeriodExtractor,
    iban: IbanExtractor,
}

impl StatementParser {
    /// Create a parser with the default extraction rules.
    pub fn new() -> Self {
        Self {
            period: PeriodExtractor::new(),
            iban: IbanExtractor::new(),
        }
    }

    /// Parse all required fields out of the statement text.
    ///
    /// Either every field is found or the parse fails with
    /// [`FieldError::NotFound`] naming each absent field; a partially
    /// filled record is never produced.
    pub fn parse(&self, text: &str) -> Result<StatementFields> {
        match (self.period.extract(text), self.iban.extract(text)) {
            (Some(period), Some(iban)) => {
                let fields = StatementFields {
                    start_date: period.start_yymmdd(),
                    end_date: period.end_yymmdd(),
                    iban,
                };
                debug!(?fields, "extracted statement fields");
                Ok(fields)
            }
            (period, iban) => {
                let mut missing = Vec::new();
                if period.is_none() {
                    missing.push("start_date".to_string());
                    missing.push("end_date".to_string());
                }
                if iban.is_none() {
                    missing.push("iban".to_string());
                }
                Err(FieldError::NotFound(missing))
            }
        }
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}
