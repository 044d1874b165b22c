//! Catalog configuration for the parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::catalog::{DEFAULT_CATALOG, Lexicon, PointsTable};
use crate::error::Result;

/// Parser configuration: the product catalog supplied by the host.
///
/// Defaults to the built-in burger-restaurant menu, so the parser works
/// with zero configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReciboConfig {
    /// Products in lexicon order. Order matters: the per-line scan visits
    /// products in this order.
    pub products: Vec<ProductConfig>,
}

/// One catalog product: canonical name, synonym surface forms, and the
/// reward value used by the host's loyalty logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub points: u32,
}

impl Default for ReciboConfig {
    fn default() -> Self {
        Self {
            products: DEFAULT_CATALOG
                .iter()
                .map(|(name, synonyms, points)| ProductConfig {
                    name: name.to_string(),
                    synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
                    points: *points,
                })
                .collect(),
        }
    }
}

impl ReciboConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Compile the synonym lexicon from this catalog.
    pub fn lexicon(&self) -> Result<Lexicon> {
        let lexicon = Lexicon::build(
            self.products
                .iter()
                .map(|p| (p.name.clone(), p.synonyms.clone())),
        )?;
        Ok(lexicon)
    }

    /// Build the points table from this catalog.
    pub fn points_table(&self) -> PointsTable {
        PointsTable::new(self.products.iter().map(|p| (p.name.clone(), p.points)))
    }
}
