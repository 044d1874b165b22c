//! Product catalog: the synonym lexicon and the reward points table.
//!
//! Both tables are built once at process start and are read-only for the
//! lifetime of the process; the parser takes them by reference.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::error::CatalogError;
use crate::text::normalize;

/// Built-in catalog: canonical name, synonym surface forms, reward points.
///
/// Synonym order matters: within a line the first synonym that matches a
/// product stops the scan for that product, so more specific forms come
/// first.
pub(crate) const DEFAULT_CATALOG: &[(&str, &[&str], u32)] = &[
    (
        "Hamburguesa Clásica",
        &[
            "hamburguesa",
            "hamb.",
            "burger",
            "hb",
            "hbg",
            "classic",
            "clasica",
            "sencilla",
            "single",
        ],
        5,
    ),
    (
        "Hamburguesa Doble",
        &["hamburguesa doble", "hamb doble", "doble", "double", "dbl"],
        7,
    ),
    (
        "Combo Hamburguesa",
        &["combo", "comb", "cmb", "paquete", "meal", "menu"],
        8,
    ),
    ("Alitas", &["alitas", "wing", "wings", "wingz"], 5),
    ("Boneless", &["boneless", "bonless", "bonles", "bon."], 5),
    (
        "Papas a la Francesa",
        &[
            "papas",
            "francesa",
            "french fries",
            "fries",
            "pap.",
            "paps",
            "papitas",
            "papas a la francesa",
        ],
        3,
    ),
    (
        "Aros de Cebolla",
        &["aros", "aros cebolla", "anillos", "onion rings", "rings"],
        3,
    ),
    (
        "Refresco",
        &[
            "refresco",
            "ref",
            "soda",
            "coca",
            "pepsi",
            "sprite",
            "fanta",
            "manzanita",
            "bebida",
            "soft",
        ],
        3,
    ),
    ("Malteada", &["malteada", "shake", "malte", "maltead"], 4),
    ("Limonada", &["limonada", "lim.", "limon", "lemonade"], 3),
    ("Ensalada", &["ensalada", "salad"], 4),
    (
        "Postre",
        &["postre", "dessert", "brownie", "pie", "helado", "nieve", "pastel"],
        4,
    ),
    (
        "Cerveza",
        &["cerveza", "beer", "victoria", "corona", "tecate", "modelo", "bohemia"],
        3,
    ),
];

/// One synonym surface form with its precompiled post-keyword quantity
/// pattern ("alitas x10", "boneless 8pz").
#[derive(Debug, Clone)]
pub struct Synonym {
    text: String,
    post_qty: Regex,
}

impl Synonym {
    /// Build from a raw surface form. The text is normalized to the same
    /// canonical form as receipt lines. Returns `None` if nothing is left
    /// after normalization.
    fn new(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            return None;
        }
        // Small integer within a short window after the keyword, with an
        // optional unit suffix.
        let pattern = format!(
            r"{}[^\d]{{0,3}}(\d{{1,2}})\s*(?:pz|pzas?|u|uds?)?",
            regex::escape(&text)
        );
        let post_qty = Regex::new(&pattern).ok()?;
        Some(Self { text, post_qty })
    }

    /// Normalized synonym text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Quantity found in the window after this keyword, if any.
    ///
    /// An integer that continues as a decimal number ("alitas 80.00") is
    /// a price, not a count, and is rejected.
    pub(crate) fn post_quantity(&self, line: &str) -> Option<u32> {
        for caps in self.post_qty.captures_iter(line) {
            let digits = caps.get(1)?;
            let rest = &line[digits.end()..];
            let mut chars = rest.chars();
            if matches!(chars.next(), Some('.') | Some(','))
                && chars.next().is_some_and(|c| c.is_ascii_digit())
            {
                continue;
            }
            return digits.as_str().parse().ok();
        }
        None
    }
}

/// A canonical product with its ordered synonym list.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    canonical: String,
    synonyms: Vec<Synonym>,
}

impl LexiconEntry {
    /// Canonical product name, the stable key into the points table.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Synonyms in scan order.
    pub fn synonyms(&self) -> &[Synonym] {
        &self.synonyms
    }
}

/// Ordered synonym lexicon. Iteration order is insertion order, which
/// drives the per-line product scan.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Build a lexicon from (canonical name, synonyms) pairs.
    ///
    /// Rejects an empty catalog, duplicate canonical names, and products
    /// with no usable synonyms. Synonyms are normalized here so matching
    /// never has to re-normalize them.
    pub fn build<I, S>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for (canonical, synonyms) in pairs {
            if !seen.insert(canonical.clone()) {
                return Err(CatalogError::DuplicateProduct(canonical));
            }
            if synonyms.is_empty() {
                return Err(CatalogError::NoSynonyms(canonical));
            }

            let mut compiled = Vec::with_capacity(synonyms.len());
            for raw in &synonyms {
                match Synonym::new(raw.as_ref()) {
                    Some(synonym) => compiled.push(synonym),
                    None => return Err(CatalogError::EmptySynonym(canonical)),
                }
            }

            entries.push(LexiconEntry {
                canonical,
                synonyms: compiled,
            });
        }

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { entries })
    }

    /// Built-in burger-restaurant lexicon.
    pub fn default_menu() -> Self {
        Self::build(DEFAULT_CATALOG.iter().map(|(name, synonyms, _)| {
            (name.to_string(), synonyms.to_vec())
        }))
        .expect("built-in catalog is valid")
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LexiconEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reward value per canonical product. Products absent from the table
/// score zero.
#[derive(Debug, Clone, Default)]
pub struct PointsTable {
    points: HashMap<String, u32>,
}

impl PointsTable {
    pub fn new(pairs: impl IntoIterator<Item = (String, u32)>) -> Self {
        Self {
            points: pairs.into_iter().collect(),
        }
    }

    /// Built-in points for the burger-restaurant menu.
    pub fn default_menu() -> Self {
        Self::new(
            DEFAULT_CATALOG
                .iter()
                .map(|(name, _, points)| (name.to_string(), *points)),
        )
    }

    /// Points for one unit of the named product.
    pub fn get(&self, name: &str) -> u32 {
        self.points.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_builds() {
        let lexicon = Lexicon::default_menu();
        assert_eq!(lexicon.len(), DEFAULT_CATALOG.len());

        let first = lexicon.iter().next().unwrap();
        assert_eq!(first.canonical(), "Hamburguesa Clásica");
        assert_eq!(first.synonyms()[0].text(), "hamburguesa");
    }

    #[test]
    fn test_synonyms_are_normalized() {
        let lexicon = Lexicon::build([(
            "Menú".to_string(),
            vec!["MENÚ", "  paquete  "],
        )])
        .unwrap();

        let entry = lexicon.iter().next().unwrap();
        assert_eq!(entry.synonyms()[0].text(), "menu");
        assert_eq!(entry.synonyms()[1].text(), "paquete");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Lexicon::build(Vec::<(String, Vec<&str>)>::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let err = Lexicon::build([
            ("Alitas".to_string(), vec!["alitas"]),
            ("Alitas".to_string(), vec!["wings"]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProduct(name) if name == "Alitas"));
    }

    #[test]
    fn test_missing_synonyms_rejected() {
        let err = Lexicon::build([("Alitas".to_string(), Vec::<&str>::new())]).unwrap_err();
        assert!(matches!(err, CatalogError::NoSynonyms(_)));

        let err = Lexicon::build([("Alitas".to_string(), vec!["  ¡! "])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySynonym(_)));
    }

    #[test]
    fn test_post_quantity_window() {
        let lexicon = Lexicon::build([("Alitas".to_string(), vec!["alitas"])]).unwrap();
        let synonym = &lexicon.iter().next().unwrap().synonyms()[0];

        assert_eq!(synonym.post_quantity(" alitas x10 "), Some(10));
        assert_eq!(synonym.post_quantity(" alitas 8pz "), Some(8));
        assert_eq!(synonym.post_quantity(" alitas bbq "), None);
        // Window is three non-digit characters at most.
        assert_eq!(synonym.post_quantity(" alitas bbq grandes 6 "), None);
        // A trailing price is not a quantity.
        assert_eq!(synonym.post_quantity(" alitas 80.00 "), None);
    }

    #[test]
    fn test_points_lookup_defaults_to_zero() {
        let table = PointsTable::default_menu();
        assert_eq!(table.get("Alitas"), 5);
        assert_eq!(table.get("Hamburguesa Doble"), 7);
        assert_eq!(table.get("No Existe"), 0);
    }
}
