//! Product mention detection against the synonym lexicon.

use std::collections::HashMap;

use tracing::trace;

use super::patterns::QTY_PRE;
use crate::models::catalog::{Lexicon, Synonym};
use crate::models::ticket::DetectedProduct;

/// Detect product mentions across segmented receipt lines.
///
/// For each line, products are scanned in lexicon insertion order and a
/// product's synonyms in list order. The first synonym that matches stops
/// the scan for that product on that line, so two synonyms of the same
/// product on one line ("combo" and "meal") count once. Matches of the
/// same product on different lines accumulate by summing quantities.
/// Output order is first-detection order; canonical names are unique.
pub fn detect_products(lines: &[String], lexicon: &Lexicon) -> Vec<DetectedProduct> {
    let mut quantities: HashMap<&str, u32> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for line in lines {
        let padded = format!(" {} ", line);

        for entry in lexicon.iter() {
            for synonym in entry.synonyms() {
                if !contains_token(&padded, synonym.text()) {
                    continue;
                }

                let quantity = resolve_quantity(&padded, synonym);
                trace!(
                    product = entry.canonical(),
                    synonym = synonym.text(),
                    quantity,
                    "product mention"
                );

                match quantities.entry(entry.canonical()) {
                    std::collections::hash_map::Entry::Occupied(mut slot) => {
                        *slot.get_mut() += quantity;
                    }
                    std::collections::hash_map::Entry::Vacant(slot) => {
                        slot.insert(quantity);
                        order.push(entry.canonical());
                    }
                }
                break;
            }
        }
    }

    order
        .into_iter()
        .map(|name| DetectedProduct {
            name: name.to_string(),
            quantity: quantities[name],
        })
        .collect()
}

/// Boundary containment: the synonym must touch a whitespace boundary on
/// at least one side (line edges are covered by the padding). One-sided
/// boundaries keep inflected forms matching ("hamburguesas" still hits
/// "hamburguesa") while a fully interior substring does not match.
fn contains_token(padded_line: &str, token: &str) -> bool {
    padded_line.contains(&format!(" {token} "))
        || padded_line.contains(&format!("{token} "))
        || padded_line.contains(&format!(" {token}"))
}

/// Resolve the quantity for one synonym match on one line.
///
/// Default is 1. A small integer leading into an alphabetic token
/// ("2 hamburguesas") overrides the default; a small integer in a short
/// window after the keyword ("alitas x10") wins over the pre-keyword
/// value when larger or equal.
fn resolve_quantity(padded_line: &str, synonym: &Synonym) -> u32 {
    let mut quantity = QTY_PRE
        .captures(padded_line)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(1);

    if let Some(post) = synonym.post_quantity(padded_line) {
        quantity = quantity.max(post);
    }

    quantity.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Lexicon;
    use pretty_assertions::assert_eq;

    fn menu() -> Lexicon {
        Lexicon::default_menu()
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn find(products: &[DetectedProduct], name: &str) -> u32 {
        products
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.quantity)
            .unwrap_or(0)
    }

    #[test]
    fn test_default_quantity_is_one() {
        let products = detect_products(&lines(&["hamburguesa 90.00"]), &menu());
        assert_eq!(find(&products, "Hamburguesa Clásica"), 1);
    }

    #[test]
    fn test_pre_keyword_quantity() {
        let products = detect_products(&lines(&["2 hamburguesas 180.00"]), &menu());
        assert_eq!(find(&products, "Hamburguesa Clásica"), 2);
    }

    #[test]
    fn test_pre_keyword_with_unit_word() {
        let products = detect_products(&lines(&["10 pz alitas"]), &menu());
        assert_eq!(find(&products, "Alitas"), 10);
    }

    #[test]
    fn test_post_keyword_quantity_overrides() {
        let products = detect_products(&lines(&["alitas x10"]), &menu());
        assert_eq!(find(&products, "Alitas"), 10);

        let products = detect_products(&lines(&["boneless 8pz"]), &menu());
        assert_eq!(find(&products, "Boneless"), 8);
    }

    #[test]
    fn test_post_keyword_wins_over_pre_keyword() {
        // Both present: the post-keyword value is larger and wins.
        let products = detect_products(&lines(&["2 ordenes alitas x10"]), &menu());
        assert_eq!(find(&products, "Alitas"), 10);
    }

    #[test]
    fn test_same_line_duplicate_synonyms_count_once() {
        // "combo" and "meal" both name Combo Hamburguesa: one unit.
        let products = detect_products(&lines(&["combo meal grande"]), &menu());
        assert_eq!(find(&products, "Combo Hamburguesa"), 1);
    }

    #[test]
    fn test_cross_line_accumulation() {
        let products = detect_products(
            &lines(&["hamburguesa 90.00", "hamburguesa 90.00"]),
            &menu(),
        );
        assert_eq!(find(&products, "Hamburguesa Clásica"), 2);
    }

    #[test]
    fn test_plural_form_matches() {
        // "hamburguesas" carries a left boundary, so the singular synonym
        // still hits.
        let products = detect_products(&lines(&["2 hamburguesas 180.00"]), &menu());
        assert_eq!(find(&products, "Hamburguesa Clásica"), 2);
    }

    #[test]
    fn test_interior_substring_does_not_match() {
        // "meal" buried inside a word touches no boundary.
        let products = detect_products(&lines(&["oatmealita 10.00"]), &menu());
        assert_eq!(find(&products, "Combo Hamburguesa"), 0);
    }

    #[test]
    fn test_multi_word_synonym() {
        let products = detect_products(&lines(&["onion rings 35.00"]), &menu());
        assert_eq!(find(&products, "Aros de Cebolla"), 1);
    }

    #[test]
    fn test_first_detection_order_is_preserved() {
        let products = detect_products(
            &lines(&["refresco 25.00", "alitas 80.00", "refresco 25.00"]),
            &menu(),
        );
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Refresco", "Alitas"]);
        assert_eq!(find(&products, "Refresco"), 2);
    }

    #[test]
    fn test_no_lines_no_products() {
        assert!(detect_products(&[], &menu()).is_empty());
    }
}
