//! Logical line segmentation for OCR receipt text.

use lazy_static::lazy_static;
use regex::Regex;

use super::normalize::{WS_RUN, fold_chars};

lazy_static! {
    // A digit, a run of two or more spaces, then a non-digit: an OCR
    // artifact where a quantity column got glued onto the next column.
    // The regex crate has no lookaround, so the break is materialized as
    // a newline and split together with the literal line breaks.
    static ref COLUMN_GAP: Regex = Regex::new(r"(\d)[^\S\n]{2,}([^\d\s])").unwrap();
}

/// Split OCR text into logical lines.
///
/// Applies the same character folding as [`super::normalize`] but keeps
/// the raw spacing, so the column-gap heuristic can fire before
/// whitespace collapses. Splits on line breaks and on "digit, two or
/// more spaces, non-digit". Each piece is collapsed and trimmed; empty
/// pieces are dropped. Document order is preserved.
pub fn segment(text: &str) -> Vec<String> {
    let folded = fold_chars(text);
    let broken = COLUMN_GAP.replace_all(&folded, "${1}\n${2}");

    broken
        .split('\n')
        .map(|piece| WS_RUN.replace_all(piece, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_on_newlines() {
        let lines = segment("combo 80.00\nrefresco 25.00\n\n");
        assert_eq!(lines, vec!["combo 80.00", "refresco 25.00"]);
    }

    #[test]
    fn test_split_on_column_gap() {
        // OCR flattened two columns: the trailing quantity "1" belongs to
        // the next item.
        let lines = segment("papas francesas 1  refresco grande");
        assert_eq!(lines, vec!["papas francesas 1", "refresco grande"]);
    }

    #[test]
    fn test_gap_between_digits_does_not_split() {
        let lines = segment("combo 80.00  2 alitas");
        assert_eq!(lines, vec!["combo 80.00 2 alitas"]);
    }

    #[test]
    fn test_single_space_does_not_split() {
        let lines = segment("2 hamburguesas 90.00");
        assert_eq!(lines, vec!["2 hamburguesas 90.00"]);
    }

    #[test]
    fn test_pieces_are_folded_and_trimmed() {
        let lines = segment("  COMBO HAMBURGUESA   $80.00 \n  ALITAS  ");
        assert_eq!(lines, vec!["combo hamburguesa 80.00", "alitas"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n").is_empty());
    }
}
