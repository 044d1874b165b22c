//! Canonical normalization of raw OCR text.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

lazy_static! {
    pub(crate) static ref WS_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Characters that survive normalization besides letters, digits and `_`.
/// Percent and hash show up in promo codes, dot/slash/dash in dates,
/// prices and folio numbers.
fn is_whitelisted_symbol(c: char) -> bool {
    matches!(c, '%' | '#' | '.' | '/' | '-')
}

/// Lowercase, strip diacritics, and replace everything outside the
/// whitelist with a space. Whitespace is passed through untouched so the
/// segmenter can still see column gaps and line breaks.
pub(crate) fn fold_chars(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || is_whitelisted_symbol(c) || c.is_whitespace()
            {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Canonicalize raw OCR text for pattern matching.
///
/// Folds to lowercase, decomposes and strips diacritical marks, replaces
/// any character outside the word class plus `% # . / -` with a space,
/// collapses whitespace runs to a single space, and trims. Total and
/// idempotent; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let folded = fold_chars(text);
    WS_RUN.replace_all(&folded, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lowercase_and_accent_folding() {
        assert_eq!(normalize("PAPÁS FRANCESAS"), "papas francesas");
        assert_eq!(normalize("Menú Clásico"), "menu clasico");
        assert_eq!(normalize("Jalapeño"), "jalapeno");
    }

    #[test]
    fn test_symbol_whitelist() {
        assert_eq!(normalize("TOTAL $45.00"), "total 45.00");
        assert_eq!(normalize("folio #A-123"), "folio #a-123");
        assert_eq!(normalize("12/05/2024"), "12/05/2024");
        assert_eq!(normalize("desc 10%"), "desc 10%");
        // Comma and currency sign are noise, not data.
        assert_eq!(normalize("1,234"), "1 234");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("  a\t\tb \n c  "), "a b c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "PAPÁS  FRANCESAS\nTOTAL $45.00",
            "folio: ABC-1234  ¡gracias!",
            "2 hamburguesas   10 pz alitas",
            "",
            "ñandú über café",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_fold_chars_preserves_line_structure() {
        let folded = fold_chars("COMBO  $80.00\n2 Alitas");
        assert_eq!(folded, "combo   80.00\n2 alitas");
    }
}
