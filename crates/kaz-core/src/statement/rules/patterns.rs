//! Common regex patterns for statement field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date as printed on statements: DD.MM.YYYY
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{2})\.(\d{2})\.(\d{4})\b"
    ).unwrap();

    // Lines announcing the statement period, in the languages these
    // statements come in
    pub static ref PERIOD_LABEL: Regex = Regex::new(
        r"(?i)(?:statement\s+period|abrechnungszeitraum|kontoauszug|zeitraum|period|vom\b|from\b)"
    ).unwrap();

    // IBAN: country code, check digits, then the BBAN in optionally
    // space-separated groups (11-30 alphanumerics)
    pub static ref IBAN_PATTERN: Regex = Regex::new(
        r"\b([A-Z]{2}\d{2})((?:\s?[A-Z0-9]{4}){2,7}(?:\s?[A-Z0-9]{1,3})?)\b"
    ).unwrap();

    // Basename shape this tool itself produces; files matching it are
    // already processed
    pub static ref RENAMED_STEM: Regex = Regex::new(
        r"^\d{6}-\d{6}-[A-Z]{2}\d{2}[A-Z0-9]{11,30}$"
    ).unwrap();
}
