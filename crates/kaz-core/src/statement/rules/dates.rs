//! Statement period extraction.
//!
//! Selection rule, fixed and tested: the first line containing a recognized
//! period label and at least two calendar-valid `DD.MM.YYYY` dates wins;
//! when no labeled line qualifies, the first line in document order with
//! exactly two valid dates is used. The first date is the period start, the
//! second the period end.

use chrono::NaiveDate;

use super::patterns::{DATE_DMY, PERIOD_LABEL};
use super::FieldExtractor;

/// The date range covered by a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StatementPeriod {
    /// Period start in `YYMMDD` form.
    pub fn start_yymmdd(&self) -> String {
        to_yymmdd(self.start)
    }

    /// Period end in `YYMMDD` form.
    pub fn end_yymmdd(&self) -> String {
        to_yymmdd(self.end)
    }
}

/// Statement period field extractor.
pub struct PeriodExtractor;

impl PeriodExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PeriodExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PeriodExtractor {
    type Output = StatementPeriod;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        // Labeled period line first
        for line in text.lines() {
            if !PERIOD_LABEL.is_match(line) {
                continue;
            }
            let dates = dates_in_line(line);
            if dates.len() >= 2 {
                return Some(StatementPeriod {
                    start: dates[0],
                    end: dates[1],
                });
            }
        }

        // Fallback: first line with exactly two dates
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        text.lines()
            .filter_map(|line| {
                let dates = dates_in_line(line);
                if dates.len() == 2 {
                    Some(StatementPeriod {
                        start: dates[0],
                        end: dates[1],
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

/// All calendar-valid `DD.MM.YYYY` dates in a line, in order of appearance.
fn dates_in_line(line: &str) -> Vec<NaiveDate> {
    DATE_DMY
        .captures_iter(line)
        .filter_map(|caps| {
            let day: u32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        })
        .collect()
}

/// Normalize one `DD.MM.YYYY` date string to `YYMMDD`.
///
/// Returns `None` for strings that do not parse as a calendar date.
pub fn normalize_date(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%d.%m.%Y")
        .ok()
        .map(to_yymmdd)
}

fn to_yymmdd(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("31.12.2023").as_deref(), Some("231231"));
        assert_eq!(normalize_date("01.01.2023").as_deref(), Some("230101"));
        assert_eq!(normalize_date("05.09.2024").as_deref(), Some("240905"));
    }

    #[test]
    fn test_normalize_date_rejects_invalid() {
        assert_eq!(normalize_date("32.01.2023"), None);
        assert_eq!(normalize_date("29.02.2023"), None); // not a leap year
        assert_eq!(normalize_date("2023-01-31"), None);
    }

    #[test]
    fn test_normalize_date_always_six_digits() {
        for date in ["01.01.2000", "09.09.2009", "28.02.2024", "31.12.1999"] {
            let normalized = normalize_date(date).unwrap();
            assert_eq!(normalized.len(), 6);
            assert!(normalized.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_extract_labeled_period() {
        let text = "Account statement\nStatement period: 01.01.2023 to 31.01.2023\n";
        let period = PeriodExtractor::new().extract(text).unwrap();

        assert_eq!(period.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(period.end, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());
        assert_eq!(period.start_yymmdd(), "230101");
        assert_eq!(period.end_yymmdd(), "230131");
    }

    #[test]
    fn test_labeled_line_beats_earlier_date_pair() {
        // A booking line with two dates appears before the period line;
        // the labeled line must win.
        let text = "01.03.2023 02.03.2023 card payment\n\
                    Zeitraum 01.01.2023 - 31.01.2023\n";
        let period = PeriodExtractor::new().extract(text).unwrap();
        assert_eq!(period.start_yymmdd(), "230101");
        assert_eq!(period.end_yymmdd(), "230131");
    }

    #[test]
    fn test_fallback_first_two_date_line() {
        let text = "no label here\n15.04.2023 bis 14.05.2023\nlater 01.06.2023 30.06.2023\n";
        let period = PeriodExtractor::new().extract(text).unwrap();
        assert_eq!(period.start_yymmdd(), "230415");
        assert_eq!(period.end_yymmdd(), "230514");
    }

    #[test]
    fn test_invalid_dates_are_not_candidates() {
        // 31.02.2023 does not exist, so this line has only one valid date
        // and must not be selected.
        let text = "31.02.2023 15.03.2023\n01.01.2023 31.01.2023\n";
        let period = PeriodExtractor::new().extract(text).unwrap();
        assert_eq!(period.start_yymmdd(), "230101");
    }

    #[test]
    fn test_no_dates_found() {
        assert!(PeriodExtractor::new().extract("nothing to see").is_none());
    }

    #[test]
    fn test_extract_all_in_document_order() {
        let text = "01.01.2023 31.01.2023\n01.02.2023 28.02.2023\n";
        let all = PeriodExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].start_yymmdd(), "230101");
        assert_eq!(all[1].start_yymmdd(), "230201");
    }
}
