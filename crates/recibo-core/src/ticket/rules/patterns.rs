//! Common regex patterns for receipt field extraction.
//!
//! All patterns run against normalized text (lowercase, accent-free,
//! single spaces), but keep `(?i)` and the `[.,]`/`\$?` tolerance so they
//! also behave on raw text in unit tests and ad hoc callers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Transaction id, labeled. Receipt vocabularies vary per POS vendor;
    // folio is the most common on Mexican receipts.
    pub static ref ID_LABELED: Regex = Regex::new(
        r"(?i)(?:folio|ticket|tkt|orden|transac(?:cion)?|venta|nota)\s*[:#]?\s*([a-z0-9-]{4,})"
    ).unwrap();

    // Generic id/number label, tried only after the specific labels.
    pub static ref ID_GENERIC: Regex = Regex::new(
        r"(?i)(?:id|no\.?)\s*[:#]?\s*([a-z0-9-]{4,})"
    ).unwrap();

    // Numeric date: 1-2 digit day and month, 4-digit year in the 2000s.
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2})[./-](\d{1,2})[./-](20\d{2})\b"
    ).unwrap();

    // Labeled total with an optional qualifier and a short non-digit gap
    // before the amount.
    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)total(?:\s*(?:a\s*pagar|mxn|pago))?[^0-9]{0,12}\$?\s*([0-9]{1,4}[.,][0-9]{2})"
    ).unwrap();

    // Any currency-like number: up to four integer digits, exactly two
    // decimals.
    pub static ref CURRENCY_NUMBER: Regex = Regex::new(
        r"\$?\s*([0-9]{1,4}[.,][0-9]{2})"
    ).unwrap();

    // Small integer leading into an alphabetic token, with an optional
    // unit word: "2 hamburguesa", "10 pz alitas". The trailing letter is
    // consumed instead of asserted (the regex crate has no lookahead);
    // only the captured digits are used.
    pub static ref QTY_PRE: Regex = Regex::new(
        r"(?:^|\s)(\d{1,2})\s*(?:pzas?|pz|uds?|u|x)?\s*[a-z]"
    ).unwrap();
}
