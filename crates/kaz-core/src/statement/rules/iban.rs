//! IBAN (International Bank Account Number) extraction.
//!
//! Selection rule: first match in document order. Internal spaces are
//! stripped from the matched text. Checksums are not validated; the shape
//! (country code, check digits, 11-30 alphanumerics) is the only filter.

use super::patterns::IBAN_PATTERN;
use super::FieldExtractor;

/// IBAN field extractor.
pub struct IbanExtractor;

impl IbanExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IbanExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IbanExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        IBAN_PATTERN
            .captures_iter(text)
            .filter_map(|caps| {
                let iban: String = caps[0].chars().filter(|c| !c.is_whitespace()).collect();
                // Country code + check digits + 11-30 character BBAN
                if (15..=34).contains(&iban.len()) {
                    Some(iban)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Extract the first IBAN from text, spaces stripped.
pub fn extract_iban(text: &str) -> Option<String> {
    IbanExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_iban_with_spaces() {
        let text = "IBAN: DE44 5001 0517 5407 3249 31\nBIC: XXX";
        assert_eq!(
            extract_iban(text).as_deref(),
            Some("DE44500105175407324931")
        );
    }

    #[test]
    fn test_extract_iban_contiguous() {
        let text = "Konto DE44500105175407324931 EUR";
        assert_eq!(
            extract_iban(text).as_deref(),
            Some("DE44500105175407324931")
        );
    }

    #[test]
    fn test_first_match_wins() {
        let text = "DE44 5001 0517 5407 3249 31\nGB29 NWBK 6016 1331 9268 19\n";
        assert_eq!(
            extract_iban(text).as_deref(),
            Some("DE44500105175407324931")
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "IBAN: DE44 5001 0517 5407 3249 31";
        let first = extract_iban(text);
        let second = extract_iban(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_iban() {
        assert_eq!(extract_iban("no account identifier here"), None);
    }

    #[test]
    fn test_non_iban_letter_digit_runs_ignored() {
        // Too short to be an IBAN
        assert_eq!(extract_iban("ref AB12 XY99"), None);
    }

    #[test]
    fn test_extract_all_document_order() {
        let text = "GB29 NWBK 6016 1331 9268 19 then DE44500105175407324931";
        let all = IbanExtractor::new().extract_all(text);
        assert_eq!(
            all,
            vec![
                "GB29NWBK60161331926819".to_string(),
                "DE44500105175407324931".to_string(),
            ]
        );
    }
}
