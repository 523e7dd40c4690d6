use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A sellable catalog item. The generation pipeline only reads products; it
/// never changes stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub sku: String,
    /// Unit price in whole currency units, e.g. `29990` for CLP 29.990.
    pub price: u64,
    pub stock: u32,
    #[serde(default)]
    pub category: Option<String>,
    /// Display hint for the renderer.
    #[serde(default)]
    pub color: Option<String>,
}

impl Product {
    #[must_use]
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }
}

/// Coarse stock bucket shown next to each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    High,
    Medium,
    Low,
}

impl StockLevel {
    /// High above 200 units, Medium above 50, otherwise Low.
    #[must_use]
    pub fn from_stock(stock: u32) -> Self {
        if stock > 200 {
            StockLevel::High
        } else if stock > 50 {
            StockLevel::Medium
        } else {
            StockLevel::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StockLevel::High => "ALTO",
            StockLevel::Medium => "MEDIO",
            StockLevel::Low => "BAJO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub product_count: usize,
    pub total_units: u64,
    pub max_stock: u32,
}

impl CatalogSummary {
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            product_count: products.len(),
            total_units: products.iter().map(|p| u64::from(p.stock)).sum(),
            max_stock: products.iter().map(|p| p.stock).max().unwrap_or(0),
        }
    }
}

/// The product featured in the feed preview: the highest-stock product,
/// first in catalog order on ties.
#[must_use]
pub fn preview_product(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .reduce(|best, p| if p.stock > best.stock { p } else { best })
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Load and validate a product catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&content)
}

/// Parse and validate a product catalog from YAML text of the form
/// `products: [...]`.
///
/// # Errors
///
/// Returns `ConfigError` if the text is not valid YAML or fails validation.
pub fn parse_catalog(content: &str) -> Result<Vec<Product>, ConfigError> {
    let file: CatalogFile = serde_yaml::from_str(content)?;
    validate_catalog(&file.products)?;
    Ok(file.products)
}

fn validate_catalog(products: &[Product]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();
    let mut seen_skus = HashSet::new();

    for product in products {
        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product {} has an empty name",
                product.id
            )));
        }

        if product.sku.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty sku",
                product.name
            )));
        }

        if product.price == 0 {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have a positive price",
                product.name
            )));
        }

        if !seen_ids.insert(product.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: {}",
                product.id
            )));
        }

        let sku = product.sku.to_uppercase();
        if !seen_skus.insert(sku) {
            return Err(ConfigError::Validation(format!(
                "duplicate sku: '{}' (from product '{}')",
                product.sku, product.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_catalog;

    const VALID_YAML: &str = r##"
products:
  - id: 1
    name: Camiseta Oversize Premium
    sku: CAM-001
    price: 29990
    stock: 145
    category: Camisetas
    color: "#2d2d2d"
  - id: 2
    name: Chaleco Puffer
    sku: CHA-008
    price: 69990
    stock: 34
"##;

    #[test]
    fn parse_catalog_reads_products() {
        let products = parse_catalog(VALID_YAML).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].category.as_deref(), Some("Camisetas"));
        assert_eq!(products[0].color.as_deref(), Some("#2d2d2d"));
        assert!(products[1].category.is_none());
    }

    #[test]
    fn parse_catalog_allows_empty_list() {
        let products = parse_catalog("products: []").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn parse_catalog_rejects_duplicate_id() {
        let yaml = r"
products:
  - { id: 1, name: A, sku: A-1, price: 100, stock: 1 }
  - { id: 1, name: B, sku: B-1, price: 100, stock: 1 }
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate product id")),
            "got: {err:?}"
        );
    }

    #[test]
    fn parse_catalog_rejects_duplicate_sku_case_insensitive() {
        let yaml = r"
products:
  - { id: 1, name: A, sku: abc-1, price: 100, stock: 1 }
  - { id: 2, name: B, sku: ABC-1, price: 100, stock: 1 }
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate sku")),
            "got: {err:?}"
        );
    }

    #[test]
    fn parse_catalog_rejects_zero_price() {
        let yaml = "products:\n  - { id: 1, name: A, sku: A-1, price: 0, stock: 1 }\n";
        assert!(matches!(
            parse_catalog(yaml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn parse_catalog_rejects_negative_stock() {
        let yaml = "products:\n  - { id: 1, name: A, sku: A-1, price: 10, stock: -3 }\n";
        assert!(matches!(parse_catalog(yaml), Err(ConfigError::FileParse(_))));
    }

    #[test]
    fn parse_catalog_rejects_blank_name() {
        let yaml = "products:\n  - { id: 1, name: ' ', sku: A-1, price: 10, stock: 1 }\n";
        assert!(matches!(
            parse_catalog(yaml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_level_thresholds() {
        assert_eq!(StockLevel::from_stock(201), StockLevel::High);
        assert_eq!(StockLevel::from_stock(200), StockLevel::Medium);
        assert_eq!(StockLevel::from_stock(51), StockLevel::Medium);
        assert_eq!(StockLevel::from_stock(50), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(0), StockLevel::Low);
    }

    #[test]
    fn summary_of_sample_catalog() {
        let summary = CatalogSummary::from_products(&sample_catalog());
        assert_eq!(summary.product_count, 8);
        assert_eq!(summary.total_units, 1493);
        assert_eq!(summary.max_stock, 450);
    }

    #[test]
    fn summary_of_empty_catalog() {
        let summary = CatalogSummary::from_products(&[]);
        assert_eq!(summary.product_count, 0);
        assert_eq!(summary.total_units, 0);
        assert_eq!(summary.max_stock, 0);
    }

    #[test]
    fn preview_product_is_highest_stock() {
        let catalog = sample_catalog();
        let preview = preview_product(&catalog).expect("expected a preview product");
        assert_eq!(preview.name, "Calcetines Pack x3");
        assert!(preview_product(&[]).is_none());
    }

    #[test]
    fn preview_product_prefers_first_on_tie() {
        let mut catalog = sample_catalog();
        catalog[0].stock = 450;
        let preview = preview_product(&catalog).unwrap();
        assert_eq!(preview.id, 1);
    }
}
