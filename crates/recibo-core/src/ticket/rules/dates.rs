//! Purchase date extraction.

use chrono::NaiveDate;

use super::patterns::DATE_NUMERIC;
use super::{ExtractionMatch, FieldExtractor};

/// Date field extractor for `D[./-]M[./-]YYYY` receipt dates.
///
/// Receipts commonly transpose day and month, so when the first number
/// could be a month (<= 12) and the second cannot (> 12) the two are
/// swapped. When both are <= 12 the literal day/month order is accepted;
/// there is no way to disambiguate and no locale inference is attempted.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in DATE_NUMERIC.captures_iter(text) {
            let mut day: u32 = caps[1].parse().unwrap_or(0);
            let mut month: u32 = caps[2].parse().unwrap_or(0);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if day <= 12 && month > 12 {
                std::mem::swap(&mut day, &mut month);
            }

            // from_ymd_opt is the validity gate: impossible dates (31/02,
            // both components > 12) are skipped.
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(date, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the purchase date from normalized receipt text.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    DateExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(extract_date("fecha 13/02/2024"), Some(ymd(2024, 2, 13)));
        assert_eq!(extract_date("13-02-2024"), Some(ymd(2024, 2, 13)));
        assert_eq!(extract_date("13.02.2024"), Some(ymd(2024, 2, 13)));
    }

    #[test]
    fn test_transposed_date_is_swapped() {
        // 02/13 cannot be day 2, month 13: swap to February 13.
        assert_eq!(extract_date("02/13/2024"), Some(ymd(2024, 2, 13)));
    }

    #[test]
    fn test_ambiguous_date_keeps_literal_order() {
        // Both components could be a month: take day/month as printed.
        assert_eq!(extract_date("05/02/2024"), Some(ymd(2024, 2, 5)));
    }

    #[test]
    fn test_invalid_candidate_is_skipped() {
        // 31/02 is impossible; the next occurrence wins.
        assert_eq!(
            extract_date("31/02/2024 impreso 15/03/2024"),
            Some(ymd(2024, 3, 15))
        );
    }

    #[test]
    fn test_match_carries_span_and_source() {
        let text = "fecha 13/02/2024 caja 1";
        let m = DateExtractor::new().extract(text).unwrap();

        assert_eq!(m.value, ymd(2024, 2, 13));
        assert_eq!(m.source, "13/02/2024");
        let (start, end) = m.position.unwrap();
        assert_eq!(&text[start..end], "13/02/2024");
    }

    #[test]
    fn test_year_must_be_2000s() {
        assert_eq!(extract_date("13/02/1998"), None);
    }

    #[test]
    fn test_absent() {
        assert_eq!(extract_date("sin fecha impresa"), None);
        assert_eq!(extract_date(""), None);
    }
}
