//! The [`CatalogProvider`] trait and the local providers.

use std::path::PathBuf;

use async_trait::async_trait;
use autopost_core::Product;

use crate::error::CatalogError;

/// Source of the product catalog.
///
/// Implementations return the full catalog or an error; they never return a
/// partial list. Product order carries no meaning.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Short label used in logs, e.g. `"shopify"` or `"file"`.
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Returns [`CatalogError`] when the source cannot be reached or read.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(autopost_core::sample_catalog())
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

/// YAML catalog file, re-read on every call so edits are picked up between
/// generations.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for FileCatalog {
    fn name(&self) -> &str {
        "file"
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let path = self.path.clone();
        let products = tokio::task::spawn_blocking(move || autopost_core::load_catalog(&path))
            .await
            .map_err(|e| {
                CatalogError::File(autopost_core::ConfigError::Validation(format!(
                    "catalog loader task failed: {e}"
                )))
            })??;
        tracing::debug!(path = %self.path.display(), count = products.len(), "loaded catalog file");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn static_catalog_returns_its_products() {
        let catalog = StaticCatalog::sample();
        let products = catalog.list_products().await.unwrap();
        assert_eq!(products.len(), 8);
        assert_eq!(catalog.name(), "static");
    }

    #[tokio::test]
    async fn static_catalog_default_is_empty() {
        let products = StaticCatalog::default().list_products().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn file_catalog_reads_yaml() {
        let path = std::env::temp_dir().join(format!(
            "autopost-file-catalog-{}.yaml",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(
                file,
                "products:\n  - {{ id: 9, name: Bufanda, sku: BUF-009, price: 15990, stock: 12 }}"
            )
            .unwrap();
        }

        let products = FileCatalog::new(path.clone()).list_products().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].sku, "BUF-009");
    }

    #[tokio::test]
    async fn file_catalog_missing_file_is_error() {
        let err = FileCatalog::new("/nonexistent/catalog.yaml")
            .list_products()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::File(autopost_core::ConfigError::FileIo { .. })
        ));
        assert!(!err.is_retriable());
    }
}
